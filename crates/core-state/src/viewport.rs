//! Viewport offsets and the render column of the cursor.

use crate::EditorState;

impl EditorState {
    /// Columns available for text once the gutter is drawn. Never zero.
    pub fn text_cols(&self) -> usize {
        self.screen_cols
            .saturating_sub(self.line_number_width)
            .max(1)
    }

    /// Recompute `rx` and move the offsets so the cursor is visible.
    pub fn scroll(&mut self) {
        self.rx = self.buffer().render_column(self.cy, self.cx);

        if self.cy < self.row_offset {
            self.row_offset = self.cy;
        }
        let rows = self.screen_rows.max(1);
        if self.cy >= self.row_offset + rows {
            self.row_offset = self.cy + 1 - rows;
        }

        let cols = self.text_cols();
        if self.rx < self.col_offset {
            self.col_offset = self.rx;
        }
        if self.rx >= self.col_offset + cols {
            self.col_offset = self.rx + 1 - cols;
        }
    }
}
