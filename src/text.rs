//! Finding the character of a laid-out text under a point.
//!
//! Glyph layout belongs to the text renderer; it is consumed here through [`CharacterLayout`].

use crate::{geom::Rect, Vec2};

pub trait CharacterLayout {
    fn char_count(&self) -> usize;
    /// World position of the character at `index`. `index == char_count()` must be supported
    /// and gives the position just past the last character.
    fn character_pos(&self, index: usize) -> Vec2;
    fn global_bounds(&self) -> Rect;
}

pub fn character_index_at_single_line<L: CharacterLayout + ?Sized>(layout: &L, coord: Vec2) -> usize {
    //! Returns the index of the last character starting at or left of `coord`,
    //! or `char_count()` if `coord` is outside the text or left of every character.
    let count = layout.char_count();
    if !layout.global_bounds().contains(coord) {
        return count;
    }
    (0..count)
        .take_while(|&i| layout.character_pos(i).x <= coord.x)
        .last()
        .unwrap_or(count)
}

pub fn character_index_at<L: CharacterLayout + ?Sized>(layout: &L, coord: Vec2) -> usize {
    //! Multi-line variant: picks the lowest line starting at or above `coord`, then the last
    //! character on it starting at or left of `coord`. The end-of-text position counts as a
    //! character. Returns `char_count()` if `coord` is outside the text.
    let count = layout.char_count();
    if !layout.global_bounds().contains(coord) {
        return count;
    }

    let mut line_start = 0;
    let mut line_y = layout.character_pos(0).y;
    for i in 1..=count {
        let y = layout.character_pos(i).y;
        if y > coord.y {
            break;
        }
        if y > line_y {
            line_start = i;
            line_y = y;
        }
    }

    (line_start..=count)
        .take_while(|&i| {
            let pos = layout.character_pos(i);
            pos.y <= line_y && pos.x <= coord.x
        })
        .last()
        .unwrap_or(count)
}
