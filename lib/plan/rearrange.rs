use crate::chess::{Board, Piece, Square};
use crate::plan::Action;
use tracing::{debug, instrument};

fn misplaced<'a>(board: &'a Board, expected: &'a Board) -> impl Iterator<Item = (Square, Piece)> + 'a {
    board.iter().filter(move |&(sq, p)| expected[sq] != Some(p))
}

/// Plans the [`Action`]s that turn the `current` physical board into the `expected` one.
///
/// Pieces already in place are left untouched, misplaced pieces are moved straight to a vacant
/// square that needs them whenever possible, and the holding area makes up for the rest.
#[instrument(level = "trace", ret)]
pub fn rearrange(current: &Board, expected: &Board) -> Vec<Action> {
    let mut board = *current;
    let mut actions = Vec::new();

    let mut perform = |board: &mut Board, a: Action| {
        let result = a.perform(board);
        debug_assert!(result.is_ok(), "`{}` failed: {:?}", a, result);
        actions.push(a);
    };

    loop {
        let shortcut = misplaced(&board, expected).find_map(|(whence, p)| {
            Square::ALL
                .into_iter()
                .find(|&sq| board[sq].is_none() && expected[sq] == Some(p))
                .map(|whither| Action::Relocate { whence, whither })
        });

        match shortcut {
            Some(a) => perform(&mut board, a),
            None => break,
        }
    }

    let leftovers: Vec<_> = misplaced(&board, expected).collect();
    for (at, piece) in leftovers {
        perform(&mut board, Action::Remove { at, piece });
    }

    for (at, piece) in expected.iter() {
        if board[at].is_none() {
            perform(&mut board, Action::Place { at, piece });
        }
    }

    debug!(%current, %expected, actions = actions.len());
    actions
}
