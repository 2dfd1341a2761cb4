use tic_tac_toe::{
    Board,
    BOARD_SIZE,
};

/// Renders a [`Board`] as a text grid, with the coordinates along the edges.
///
/// ```text
///   0 1 2
///   ------
/// 0|X   O |
/// 1|  X   |
/// 2|      |
///   ------
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardDisplay(pub Board);

impl std::fmt::Display for BoardDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  0 1 2 ")?;
        writeln!(f, "  ------")?;
        for y in 0..BOARD_SIZE {
            write!(f, "{y}|")?;
            for x in 0..BOARD_SIZE {
                let mark = self.0.get(x + BOARD_SIZE * y).map_or(' ', |player| player.as_char());
                write!(f, "{mark} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  ------")?;

        Ok(())
    }
}
