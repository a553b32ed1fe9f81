use board_core::board::Board;
use board_core::color::Color;
use board_core::piece::{Piece, PieceType};
use board_core::square::Square;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

#[test]
fn test_initial_back_ranks() {
    let board = Board::new();
    for (file, kind) in BACK_RANK.into_iter().enumerate() {
        assert_eq!(
            board.get_at(file as u8, 0),
            Some(Piece::new(kind, Color::White))
        );
        assert_eq!(
            board.get_at(file as u8, 7),
            Some(Piece::new(kind, Color::Black))
        );
    }
}

#[test]
fn test_initial_pawns() {
    let board = Board::new();
    for file in 0..8 {
        assert_eq!(
            board.get_at(file, 1),
            Some(Piece::new(PieceType::Pawn, Color::White))
        );
        assert_eq!(
            board.get_at(file, 6),
            Some(Piece::new(PieceType::Pawn, Color::Black))
        );
    }
}

#[test]
fn test_initial_middle_is_empty() {
    let board = Board::new();
    for rank in 2..6 {
        for file in 0..8 {
            assert_eq!(board.get_at(file, rank), None, "{}", Square::new(file, rank));
        }
    }
    assert_eq!(board.piece_count(), 32);
    assert_eq!(board.selected(), None);
}
