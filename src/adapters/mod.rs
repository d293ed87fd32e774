// Adapters layer: concrete implementations for external systems (http, table store).

pub mod dry_run;
pub mod http;
pub mod supabase;
