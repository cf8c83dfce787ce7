#[macro_export]
macro_rules! regex {
    ($pat:expr) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! recognizer {
    (
        name: $name:expr,
        required: [ $($req:expr),* $(,)? ]
        $(, optional: [ $($opt:expr),* $(,)? ])?
        $(, buckets: $buckets:expr)?
        , build: |$norm:ident, $raw:ident| $body:block
        $(,)?
    ) => {{
        $crate::Recognizer {
            name: $name,
            required_phrases: &[ $($req),* ],
            optional_phrases: &[ $($($opt),*)? ],
            buckets: { 0 $(| $buckets)? },
            build: Box::new(move |$norm: &str, $raw: &str| $body),
        }
    }};
}
