//! Terminal surface drawn with crossterm

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use crate::core::error::Result;
use crate::core::types::Slot;
use crate::ui::{Surface, View};

pub struct TerminalSurface<W: Write> {
    out: W,
}

impl TerminalSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text), Print("\r\n"))
    }

    fn colored(&mut self, color: Color, bold: bool, text: &str) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(color))?;
        if bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        self.line(text)?;
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)
    }

    fn draw(&mut self, view: &View) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        self.colored(Color::Cyan, true, &format!("=== {} ===", view.title))?;
        self.line("")?;

        for slot in Slot::ALL {
            let s = view.slot(slot);
            let sprite = if s.sprite.is_empty() {
                "(no sprite)"
            } else {
                s.sprite.as_str()
            };
            self.line(&format!(
                "[{}] {:<16} HP {:>4}  ATK {:>4}  {}",
                slot.index() + 1,
                s.name,
                s.hp,
                s.attack,
                sprite
            ))?;
        }
        self.line("")?;

        if !view.result.is_empty() {
            self.colored(Color::Yellow, false, &view.result)?;
        }
        if !view.winner_head.is_empty() {
            self.colored(Color::Green, true, &view.winner_head)?;
            self.line(&view.winner_type)?;
        }

        if view.gallery_visible {
            self.line("")?;
            self.colored(Color::Magenta, true, "Same type:")?;
            for entry in &view.gallery {
                self.line(&format!("  {:<16} {}", entry.name, entry.sprite))?;
            }
        }

        self.line("")?;
        let battle = format!("[b] {}", view.battle_label);
        if view.battle_enabled {
            self.colored(Color::White, true, &battle)?;
        } else {
            self.colored(Color::DarkGrey, false, &format!("{battle} (disabled)"))?;
        }
        self.line("[n] new pair   [h1/h2] show back   [l1/l2] show front   [q] quit")?;

        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn present(&mut self, view: &View) -> Result<()> {
        self.draw(view)?;
        Ok(())
    }
}
