/// Timestamp used by the console log macros.
pub fn timestamp() -> String {
    chrono::Local::now().format("%m/%d/%y %H:%M:%S").to_string()
}

/// General information.
#[macro_export]
macro_rules! say {
    ($($arg:tt)*) => {
        println!("{}[{}] {}{}", better_term::Color::BrightBlack, $crate::logging::timestamp(),
            better_term::Color::White, format!($($arg)*))
    };
}

/// Something went well.
#[macro_export]
macro_rules! yay {
    ($($arg:tt)*) => {
        println!("{}[{}] {}{}", better_term::Color::BrightBlack, $crate::logging::timestamp(),
            better_term::Color::BrightGreen, format!($($arg)*))
    };
}

/// Warnings and notices.
#[macro_export]
macro_rules! hey {
    ($($arg:tt)*) => {
        println!("{}[{}] {}{}", better_term::Color::BrightBlack, $crate::logging::timestamp(),
            better_term::Color::BrightYellow, format!($($arg)*))
    };
}

/// Something went wrong.
#[macro_export]
macro_rules! nay {
    ($($arg:tt)*) => {
        println!("{}[{}] {}{}", better_term::Color::BrightBlack, $crate::logging::timestamp(),
            better_term::Color::BrightRed, format!($($arg)*))
    };
}
