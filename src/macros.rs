macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

macro_rules! rule {
    (
        name: $name:expr,
        reject: $code:expr,
        order: $order:expr,
        check: $check:expr
        $(,)?
    ) => {{
        $crate::Rule { name: $name, outcome: $crate::Outcome::Reject($code), order: $order, check: $check }
    }};
    (
        name: $name:expr,
        signal: $signal:expr,
        order: $order:expr,
        check: $check:expr
        $(,)?
    ) => {{
        $crate::Rule { name: $name, outcome: $crate::Outcome::Signal($signal), order: $order, check: $check }
    }};
}
