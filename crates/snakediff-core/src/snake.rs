//! Snake extension along a diagonal

use crate::rect::Position;
use crate::view::SequenceView;

/// Follow matching elements forward from `at`, stopping at `limit`
pub fn forward_extend<T, U, F>(
    view: &SequenceView<'_, T, U, F>,
    at: Position,
    limit: Position,
) -> Position
where
    F: Fn(&T, &U) -> bool,
{
    let mut pos = at;
    while pos.old < limit.old && pos.new < limit.new && view.equal(pos.old, pos.new) {
        pos = pos.advance(1);
    }
    pos
}

/// Follow matching elements backward from `at`, stopping at `floor`
pub fn backward_extend<T, U, F>(
    view: &SequenceView<'_, T, U, F>,
    at: Position,
    floor: Position,
) -> Position
where
    F: Fn(&T, &U) -> bool,
{
    let mut pos = at;
    while pos.old > floor.old && pos.new > floor.new && view.equal(pos.old - 1, pos.new - 1) {
        pos = Position::new(pos.old - 1, pos.new - 1);
    }
    pos
}
