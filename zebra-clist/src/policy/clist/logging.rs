// Community-list specific logging macros. Every event carries proto="clist"
// so it can be filtered alongside the routing daemons' own events.

#[macro_export]
macro_rules! clist_debug {
    ($($arg:tt)*) => {
        tracing::debug!(proto = "clist", $($arg)*)
    };
}

#[macro_export]
macro_rules! clist_info {
    ($($arg:tt)*) => {
        tracing::info!(proto = "clist", $($arg)*)
    };
}

#[macro_export]
macro_rules! clist_warn {
    ($($arg:tt)*) => {
        tracing::warn!(proto = "clist", $($arg)*)
    };
}
