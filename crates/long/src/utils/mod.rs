#[macro_export]
#[cfg(feature = "debug")]
macro_rules! debug_log {
    ($($args:tt)*) => {{
        println!("{}", format_args!($($args)*));
    }};
}

#[macro_export]
#[cfg(not(feature = "debug"))]
macro_rules! debug_log {
    ($($args:tt)*) => {{}};
}

#[macro_export]
macro_rules! define_error {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, ::thiserror::Error)]
        #[error("{reason}")]
        pub struct $name {
            pub reason: String,
        }

        impl $name {
            pub fn new(args: impl ::core::fmt::Display) -> Self {
                Self {
                    reason: args.to_string(),
                }
            }

            pub fn fmt(args: ::core::fmt::Arguments<'_>) -> Self {
                Self {
                    reason: args.to_string(),
                }
            }
        }
    };
}

define_error!(ParseLongError);
#[macro_export]
macro_rules! parse_error {
    ($($arg:tt)*) => {
        $crate::utils::ParseLongError::fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::ParseLongError;

    #[test]
    fn parse_error_carries_reason() {
        let err = parse_error!("invalid integer literal {:?}", "12a");
        assert_eq!(err.to_string(), "invalid integer literal \"12a\"");
        assert_eq!(err, ParseLongError::new("invalid integer literal \"12a\""));
    }
}
