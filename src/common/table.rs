use tabled::{
    settings::{themes::Colorization, Alignment, Color, Padding, Style},
    Table, Tabled,
};

/// Render rows as a bordered table for a terminal or as tab-separated text
pub fn render_table<T: Tabled>(rows: &[T], terminal_output: bool) -> String {
    let mut table = Table::new(rows);

    if terminal_output {
        table
            .with(Style::sharp())
            .with(Colorization::rows([Color::FG_WHITE, Color::BG_BLACK]))
    } else {
        // One row per line, columns separated by tabs
        table
            .with(Style::empty().vertical('\t'))
            .with(Alignment::left())
            .with(Padding::zero())
    }
    .to_string()
}
