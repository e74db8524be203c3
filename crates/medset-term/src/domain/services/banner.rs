#[cfg(test)]
#[path = "banner_test.rs"]
mod tests;

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use crossterm::style::ResetColor;
use tokio::time;
use unicode_width::UnicodeWidthStr;
use yansi::Color;

use crate::domain::models::TerminalGeometry;

#[rustfmt::skip]
pub const FULL_BANNER: &str = "
███╗   ███╗███████╗██████╗
████╗ ████║██╔════╝██╔══██╗
██╔████╔██║█████╗  ██║  ██║
██║╚██╔╝██║██╔══╝  ██║  ██║
██║ ╚═╝ ██║███████╗██████╔╝
╚═╝     ╚═╝╚══════╝╚═════╝

██████╗  █████╗ ████████╗ █████╗ ███████╗███████╗████████╗███████╗
██╔══██╗██╔══██╗╚══██╔══╝██╔══██╗██╔════╝██╔════╝╚══██╔══╝██╔════╝
██║  ██║███████║   ██║   ███████║███████╗█████╗     ██║   ███████╗
██║  ██║██╔══██║   ██║   ██╔══██║╚════██║██╔══╝     ██║   ╚════██║
██████╔╝██║  ██║   ██║   ██║  ██║███████║███████╗   ██║   ███████║
╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚══════╝╚══════╝   ╚═╝   ╚══════╝
";

pub const COMPACT_BANNER: &str = "
=== MED ===
===========
== DATASETS ==
==============
";

/// Plain SGR blue (`ESC[34m`), understood by terminals without 256-color support.
fn color_prefix() -> Result<String> {
    let mut prefix = String::new();
    Color::Blue.style().fmt_prefix(&mut prefix)?;
    return Ok(prefix);
}

/// Widest line of `text` in terminal columns.
pub fn max_line_width(text: &str) -> usize {
    return text
        .lines()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or_default();
}

/// The full wordmark when it fits on one row per line, the compact banner otherwise.
pub fn select_banner(geometry: TerminalGeometry) -> &'static str {
    if geometry.columns() >= max_line_width(FULL_BANNER) {
        return FULL_BANNER;
    }

    return COMPACT_BANNER;
}

/// Pacing for the typing effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub char_delay: Duration,
    pub line_delay: Duration,
}

impl Default for Animation {
    fn default() -> Self {
        return Animation {
            char_delay: Duration::from_millis(2),
            line_delay: Duration::from_millis(10),
        };
    }
}

#[derive(Debug, Clone, Default)]
pub struct BannerRenderer {
    animation: Option<Animation>,
}

impl BannerRenderer {
    pub fn new(animation: Option<Animation>) -> BannerRenderer {
        return BannerRenderer { animation };
    }

    /// Writes the banner chosen for `geometry` and returns it. Animation only changes the
    /// pacing, the bytes written are the same either way.
    pub async fn render<W>(&self, geometry: TerminalGeometry, out: &mut W) -> Result<&'static str>
    where
        W: Write + Send,
    {
        let banner = select_banner(geometry);
        tracing::debug!(
            columns = geometry.columns(),
            compact = (banner == COMPACT_BANNER),
            animated = self.animation.is_some(),
            "rendering banner"
        );

        out.write_all(color_prefix()?.as_bytes())?;
        match self.animation {
            Some(animation) => type_out(banner, animation, out).await?,
            None => out.write_all(banner.as_bytes())?,
        }
        crossterm::queue!(out, ResetColor)?;
        out.flush()?;

        return Ok(banner);
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        time::sleep(delay).await;
    }
}

async fn type_out<W>(text: &str, animation: Animation, out: &mut W) -> Result<()>
where
    W: Write + Send,
{
    let mut buf = [0u8; 4];
    for line in text.split_inclusive('\n') {
        for c in line.chars() {
            out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;

            if c == '\n' {
                pause(animation.line_delay).await;
            } else {
                pause(animation.char_delay).await;
            }
        }
    }

    Ok(())
}
