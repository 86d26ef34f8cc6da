//! Tests for window layout: justification, overflow and color handling.

use printkit::width::strip_color_codes;
use printkit::{render, visible_length, Color, Horizontal, Vertical, WindowSpec};

const RESET: &str = "\x1b[0m";

fn plain(window: &str) -> String {
    strip_color_codes(window).into_owned()
}

// ============================================================================
// Justification Scenarios
// ============================================================================

#[test]
fn center_center_matches_reference_layout() {
    let window = render(
        &["Some", "Text!"],
        11,
        6,
        Horizontal::Center,
        Vertical::Center,
        Color::Default,
    );

    let expected = [
        format!("{RESET}+---------+{RESET}"),
        format!("{RESET}|         |{RESET}"),
        format!("{RESET}|{RESET}  Some   {RESET}|{RESET}"),
        format!("{RESET}|{RESET}  Text!  {RESET}|{RESET}"),
        format!("{RESET}|         |{RESET}"),
        format!("{RESET}+---------+{RESET}"),
    ]
    .join("\n");
    assert_eq!(window, expected);
}

#[test]
fn center_center_visible_shape() {
    let window = render(
        &["Some", "Text!"],
        11,
        6,
        Horizontal::Center,
        Vertical::Center,
        Color::Default,
    );
    insta::assert_snapshot!(plain(&window), @r"
    +---------+
    |         |
    |  Some   |
    |  Text!  |
    |         |
    +---------+
    ");
}

#[test]
fn left_top_places_content_first() {
    let window = WindowSpec::new(["New", "Text?"], 12, 7)
        .horizontal(Horizontal::Left)
        .vertical(Vertical::Top)
        .render();

    let rows: Vec<String> = plain(&window).lines().map(String::from).collect();
    assert_eq!(
        rows,
        vec![
            "+----------+",
            "| New      |",
            "| Text?    |",
            "|          |",
            "|          |",
            "|          |",
            "+----------+",
        ]
    );
}

#[test]
fn right_bottom_places_content_last() {
    let window = WindowSpec::new(["More", "Text."], 12, 7)
        .horizontal(Horizontal::Right)
        .vertical(Vertical::Bottom)
        .render();

    let rows: Vec<String> = plain(&window).lines().map(String::from).collect();
    assert_eq!(
        rows,
        vec![
            "+----------+",
            "|          |",
            "|          |",
            "|          |",
            "|     More |",
            "|    Text. |",
            "+----------+",
        ]
    );
}

// ============================================================================
// Shape and Purity
// ============================================================================

#[test]
fn empty_window_has_exact_dimensions() {
    for (width, height) in [(4, 3), (10, 5), (37, 12)] {
        let window = render::<&str>(
            &[],
            width,
            height,
            Horizontal::Center,
            Vertical::Center,
            Color::Yellow,
        );
        let rows: Vec<&str> = window.lines().collect();
        assert_eq!(rows.len(), height as usize);
        for row in rows {
            assert_eq!(visible_length(row), width as usize);
            assert!(row.starts_with("\x1b[33m"));
            assert!(row.ends_with(RESET));
        }
    }
}

#[test]
fn rendering_is_repeatable() {
    let spec = WindowSpec::new(["a", "bb", "ccc"], 15, 8).border(Color::BrightBlue);
    assert_eq!(spec.render(), spec.render());
}

#[test]
fn output_has_no_trailing_newline() {
    let window = render(&["x"], 6, 3, Horizontal::Left, Vertical::Top, Color::Default);
    assert!(!window.ends_with('\n'));
}

// ============================================================================
// Overflow
// ============================================================================

#[test]
fn overlong_line_is_not_clipped() {
    let window = render(
        &["Long Line"],
        3,
        4,
        Horizontal::Center,
        Vertical::Center,
        Color::Default,
    );
    assert_eq!(plain(&window), "+-+\n| Long Line |\n| |\n+-+");
}

#[test]
fn overlong_line_pushes_right_border_out() {
    let window = render(
        &["This line is far too long"],
        10,
        3,
        Horizontal::Right,
        Vertical::Center,
        Color::Default,
    );
    let rows: Vec<String> = plain(&window).lines().map(String::from).collect();
    assert_eq!(rows[1], "| This line is far too long |");
    assert_eq!(rows[0], "+--------+");
}

#[test]
fn every_small_size_renders() {
    for width in 0..5 {
        for height in 0..4 {
            let window = render(
                &["a", "b"],
                width,
                height,
                Horizontal::Center,
                Vertical::Bottom,
                Color::Red,
            );
            assert!(window.starts_with("\x1b[31m+"));
            assert!(window.ends_with(&format!("+{RESET}")));
        }
    }
}

// ============================================================================
// Color and Whitespace
// ============================================================================

#[test]
fn embedded_codes_and_padding_whitespace_do_not_count() {
    let line = "   \x1b[31mRed\x1b[0m  ";
    let window = render(
        &[line],
        11,
        3,
        Horizontal::Center,
        Vertical::Center,
        Color::Default,
    );

    assert_eq!(plain(&window), "+---------+\n|   Red   |\n+---------+");
    assert!(window.contains("  \x1b[31mRed\x1b[0m  "));
}

#[test]
fn colored_border_wraps_each_side() {
    let window = render(&["hi"], 8, 3, Horizontal::Left, Vertical::Top, Color::BrightMagenta);
    let content_row = window.lines().nth(1).unwrap();
    assert_eq!(
        content_row,
        "\x1b[95m|\x1b[0m hi   \x1b[95m|\x1b[0m"
    );
}
