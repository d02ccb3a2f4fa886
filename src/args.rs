use clap::Parser;

/// Every exercise runs without arguments; the flags only override the
/// window size.
#[derive(Debug, Parser)]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,
    /// Window height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
}

impl Args {
    pub fn window_config(&self, title: &str) -> WindowConfig {
        WindowConfig {
            width: self.width,
            height: self.height,
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let args = Args::try_parse_from(["triangle"]).unwrap();

        assert_eq!(
            args.window_config("Triangle"),
            WindowConfig {
                width: 800,
                height: 600,
                title: "Triangle".to_string(),
            }
        );
    }

    #[test]
    fn size_override() {
        let args = Args::try_parse_from(["triangle", "--width", "1024", "--height", "768"]).unwrap();

        assert_eq!((args.width, args.height), (1024, 768));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(Args::try_parse_from(["triangle", "--width", "0"]).is_err());
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Args::try_parse_from(["triangle", "scene.json"]).is_err());
    }
}
