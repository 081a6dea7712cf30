use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// One Dark colors used by the journal skin.
pub struct Palette;

impl Palette {
    pub const BG: Color = rgb(0x28, 0x2C, 0x34);
    pub const FG: Color = rgb(0xAB, 0xB2, 0xBF);
    pub const RED: Color = rgb(0xE0, 0x6C, 0x75);
    pub const ORANGE: Color = rgb(0xD1, 0x9A, 0x66);
    pub const YELLOW: Color = rgb(0xE5, 0xC0, 0x7B);
    pub const GREEN: Color = rgb(0x98, 0xC3, 0x79);
    pub const BLUE: Color = rgb(0x61, 0xAF, 0xEF);
    pub const CYAN: Color = rgb(0x56, 0xB6, 0xC2);
    pub const COMMENT: Color = rgb(0x5C, 0x63, 0x70);

    /// Date headings red, entry headings yellow, tickers green.
    pub fn journal_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Self::FG);
        skin.bold.set_fg(Self::CYAN);
        skin.italic.set_fg(Self::COMMENT);

        skin.headers[0].set_fg(Self::RED);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Self::YELLOW);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[1].align = Alignment::Left;

        skin.table.set_fg(Self::BLUE);
        skin.bullet.set_fg(Self::RED);
        skin.horizontal_rule.set_fg(Self::COMMENT);
        skin.inline_code.set_fg(Self::GREEN);
        skin.inline_code.set_bg(Self::BG);
        skin.code_block.set_fg(Self::ORANGE);

        skin
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}
