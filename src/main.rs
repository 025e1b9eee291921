use std::io::{self, BufRead, Write};

use hotseat_chess::board::{PieceKind, Square, BOARD_SIZE};
use hotseat_chess::game::{Frame, Intent, Rgb, Session, TurnEvent, HIGHLIGHT_RGBA};

const HELP: &str = "\
commands:
  <square>   click a square, e.g. e2 then e4
  t          next color theme
  r          reset the game
  h          show this help
  q          quit
when a pawn promotes, answer with q, r, b or n";

/// Map one input line to an intent. `None` means the line was not understood.
fn parse_line(line: &str, promotion_pending: bool) -> Option<Intent> {
    let word = line.trim();
    if promotion_pending {
        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return PieceKind::from_char(c).map(Intent::ChoosePromotion);
        }
    }
    match word {
        "t" => Some(Intent::NextTheme),
        "r" => Some(Intent::Reset),
        _ => word.parse::<Square>().ok().map(Intent::Click),
    }
}

/// Draw the board with 24-bit ANSI background colors from the frame's theme.
fn render_board(frame: &Frame) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{} ", BOARD_SIZE - row));
        for col in 0..BOARD_SIZE {
            let sq = Square(row, col);
            let mut bg = frame.theme.square_color(sq);
            if frame.highlights.contains(&sq) {
                bg = bg.blend(HIGHLIGHT_RGBA);
            }
            let Rgb(r, g, b) = bg;
            let glyph = frame.board.at(sq).map_or(' ', |view| view.symbol());
            out.push_str(&format!("\x1b[48;2;{r};{g};{b}m\x1b[30m {glyph} \x1b[0m"));
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h");
    out
}

fn print_frame(frame: &Frame) {
    println!("{}", render_board(frame));
    if !frame.highlights.is_empty() {
        let targets: Vec<String> = frame.highlights.iter().map(Square::to_string).collect();
        println!("moves: {}", targets.join(" "));
    }
    if let Some(winner) = frame.winner {
        println!("checkmate, {winner} wins. 'r' to play again");
    } else if let Some(square) = frame.pending_promotion {
        println!("promote pawn on {square} to (q, r, b, n)?");
    } else {
        println!("{} to move", frame.to_move);
    }
}

fn describe(event: &TurnEvent) -> Option<String> {
    match event {
        TurnEvent::Ignored => Some("nothing to do there".to_string()),
        TurnEvent::Deselected => Some("selection cleared".to_string()),
        TurnEvent::Moved(record) if record.castle.is_some() => {
            Some(format!("{} castles", record.color))
        }
        TurnEvent::Moved(record) if record.en_passant => {
            Some(format!("{} captures en passant on {}", record.color, record.to))
        }
        TurnEvent::ThemeChanged { index } => Some(format!("theme {index}")),
        _ => None,
    }
}

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::default();

    println!("{HELP}");
    print_frame(&session.frame());

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.trim() {
            "q" if session.game().pending_promotion().is_none() => break,
            "h" => {
                println!("{HELP}");
                continue;
            }
            _ => {}
        }

        let pending = session.game().pending_promotion().is_some();
        let Some(intent) = parse_line(&line, pending) else {
            println!("unrecognised input '{}', 'h' for help", line.trim());
            continue;
        };

        match session.handle(intent) {
            Ok(event) => {
                if let Some(text) = describe(&event) {
                    println!("{text}");
                }
            }
            Err(e) => println!("{e}"),
        }
        print_frame(&session.frame());
        let _ = stdout.flush();
    }
}
