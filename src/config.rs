// Startup options, read from the command line.
//   pixel-bounce                -> fullscreen at the primary display's size
//   pixel-bounce 640 480        -> 640x480 window
//   pixel-bounce 640 480 x      -> same, plus the vector overlay
// Numbers are read like C `atoi`: junk reads as 0, which means fullscreen.

/// Fullscreen size used only when the display cannot be queried.
pub const DEFAULT_WIDTH: usize = 640;
pub const DEFAULT_HEIGHT: usize = 480;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Fullscreen,
    Windowed { width: usize, height: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub mode: WindowMode,
    pub vector_overlay: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { mode: WindowMode::Fullscreen, vector_overlay: false }
    }
}

impl Config {
    /// Parse the arguments after the program name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let mut config = Config::default();
        if args.len() >= 2 {
            let (w, h) = (atoi(args[0].as_ref()), atoi(args[1].as_ref()));
            if w > 0 && h > 0 {
                config.mode = WindowMode::Windowed { width: w as usize, height: h as usize };
            }
        }
        config.vector_overlay = args.len() >= 3;
        config
    }

    /// Size the window opens at. `display` is the queried primary display size, if any.
    /// Visual: fullscreen covers the whole display; a failed query gives a 640x480 window.
    pub fn window_size(&self, display: Option<(usize, usize)>) -> (usize, usize) {
        match self.mode {
            WindowMode::Windowed { width, height } => (width, height),
            WindowMode::Fullscreen => display
                .filter(|&(w, h)| w > 0 && h > 0)
                .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT)),
        }
    }
}

/// Leading whitespace, optional sign, then as many digits as there are.
fn atoi(s: &str) -> i64 {
    let s = s.trim_start();
    let (neg, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut n: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        n = n.saturating_mul(10).saturating_add((b - b'0') as i64);
    }
    if neg { -n } else { n }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_is_fullscreen() {
        let c = Config::from_args(Vec::<String>::new());
        assert_eq!(c, Config::default());
    }

    #[test]
    fn fullscreen_takes_the_display_size() {
        let c = Config::default();
        assert_eq!(c.window_size(Some((2560, 1440))), (2560, 1440));
    }

    #[test]
    fn fullscreen_falls_back_when_display_is_unknown() {
        let c = Config::default();
        assert_eq!(c.window_size(None), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(c.window_size(Some((0, 1080))), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn windowed_ignores_the_display() {
        let c = Config::from_args(["800", "600"]);
        assert_eq!(c.window_size(Some((2560, 1440))), (800, 600));
    }

    #[test]
    fn one_arg_is_ignored() {
        assert_eq!(Config::from_args(["800"]).mode, WindowMode::Fullscreen);
    }

    #[test]
    fn two_args_set_window_size() {
        let c = Config::from_args(["800", "600"]);
        assert_eq!(c.mode, WindowMode::Windowed { width: 800, height: 600 });
        assert!(!c.vector_overlay);
    }

    #[test]
    fn third_arg_enables_overlay() {
        let c = Config::from_args(["800", "600", "anything"]);
        assert!(c.vector_overlay);
        assert_eq!(c.window_size(None), (800, 600));
    }

    #[test]
    fn junk_numbers_fall_back_to_fullscreen() {
        assert_eq!(Config::from_args(["wide", "tall"]).mode, WindowMode::Fullscreen);
        assert_eq!(Config::from_args(["640", "0"]).mode, WindowMode::Fullscreen);
        assert_eq!(Config::from_args(["-640", "480"]).mode, WindowMode::Fullscreen);
    }

    #[test]
    fn atoi_reads_leading_digits() {
        assert_eq!(atoi("  42px"), 42);
        assert_eq!(atoi("+7"), 7);
        assert_eq!(atoi("-12"), -12);
        assert_eq!(atoi("x1"), 0);
        assert_eq!(atoi(""), 0);
    }
}
