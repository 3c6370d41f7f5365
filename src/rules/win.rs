//! Win condition: a token standing on its goal row

use crate::board::{Color, Token};

/// White wins by reaching row 0, Black by reaching row 8. White is checked
/// first.
pub fn check_winner(white: Token, black: Token) -> Option<Color> {
    if white.at_goal() {
        Some(Color::White)
    } else if black.at_goal() {
        Some(Color::Black)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn tokens(white: Pos, black: Pos) -> (Token, Token) {
        (
            Token {
                color: Color::White,
                pos: white,
            },
            Token {
                color: Color::Black,
                pos: black,
            },
        )
    }

    #[test]
    fn test_no_winner_at_start() {
        let (w, b) = tokens(Color::White.start(), Color::Black.start());
        assert_eq!(check_winner(w, b), None);
    }

    #[test]
    fn test_white_wins_on_top_row() {
        let (w, b) = tokens(Pos::new(7, 0), Pos::new(4, 3));
        assert_eq!(check_winner(w, b), Some(Color::White));
    }

    #[test]
    fn test_black_wins_on_bottom_row() {
        let (w, b) = tokens(Pos::new(4, 5), Pos::new(0, 8));
        assert_eq!(check_winner(w, b), Some(Color::Black));
    }

    #[test]
    fn test_own_start_row_is_not_a_win() {
        let (w, b) = tokens(Pos::new(1, 8), Pos::new(6, 0));
        assert_eq!(check_winner(w, b), None);
    }
}
