mod handler;
mod router;

pub use router::analysis_router;
