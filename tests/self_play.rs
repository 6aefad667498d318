use othello_oracle::{Board, Evaluator, Move, Piece, Reply, decide};

/// Plays the oracle against itself from the standard opening until neither
/// side can move.
fn play_out(evaluator: &Evaluator) -> (Board, usize) {
    let mut board = Board::standard();
    let mut plies = 0;
    let mut passes_in_a_row = 0;

    while passes_in_a_row < 2 {
        let mover = board.next();
        let mv = match decide(&board, evaluator) {
            Reply::Move(at) => {
                passes_in_a_row = 0;
                Move::new(at, mover)
            }
            Reply::Pass => {
                passes_in_a_row += 1;
                Move::pass(mover)
            }
        };
        let before = board.piece_count();
        board.apply(mv).unwrap();
        assert_eq!(board.next(), mover.opposite());
        if !mv.is_pass() {
            assert_eq!(board.piece_count(), before + 1);
        }
        plies += 1;
        assert!(plies < 200, "game did not terminate");
    }
    (board, plies)
}

#[test]
fn self_play_reaches_a_finished_game() {
    let (board, plies) = play_out(&Evaluator::default());

    assert!(board.legal_moves().is_empty());
    let mut other_side = board;
    other_side.apply(Move::pass(board.next())).unwrap();
    assert!(other_side.legal_moves().is_empty());
    assert!(plies > 0);
    assert_eq!(
        board.count(Piece::Black) + board.count(Piece::White),
        board.piece_count()
    );
}

#[test]
fn self_play_is_deterministic() {
    let evaluator = Evaluator::default();

    assert_eq!(play_out(&evaluator), play_out(&evaluator));
}
