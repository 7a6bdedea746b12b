//! Call-site macros.
//!
//! These pass `module_path!()` of the invoking code as the debug target,
//! so `debug!(logger, ..)` inside `myapp::net::conn` is written only when a
//! namespace such as `myapp::net` is configured.

/// Build [`Data`](crate::Data) from `key => value` pairs.
///
/// ```
/// let data = logged::data! { "user" => 42, "path" => "/index" };
/// assert_eq!(data["user"], "42");
/// ```
#[macro_export]
macro_rules! data {
    () => { $crate::Data::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut data = $crate::Data::new();
        $(
            data.insert(::std::string::ToString::to_string(&$key), ::std::string::ToString::to_string(&$value));
        )+
        data
    }};
}

/// Write a debug entry through a [`Logger`](crate::Logger) if the calling
/// module is enabled.
#[macro_export]
macro_rules! debug {
    ($log:expr, $msg:expr $(,)?) => {
        $log.debug_at(::std::module_path!(), $msg, ::std::option::Option::None)
    };
    ($log:expr, $msg:expr, $data:expr $(,)?) => {
        $log.debug_at(::std::module_path!(), $msg, ::std::option::Option::Some(&$data))
    };
}

/// Write an info entry through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! info {
    ($log:expr, $msg:expr $(,)?) => {
        $log.info($msg, ::std::option::Option::None)
    };
    ($log:expr, $msg:expr, $data:expr $(,)?) => {
        $log.info($msg, ::std::option::Option::Some(&$data))
    };
}

/// Whether debug output is enabled for the calling module.
#[macro_export]
macro_rules! is_debug {
    ($log:expr $(,)?) => {
        $log.is_debug_at(::std::module_path!())
    };
}
