mod guard;

pub use guard::require_permission;
