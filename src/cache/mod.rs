//! On-disk card image cache: naming, reconciliation and materialization

pub mod materialize;
pub mod naming;
pub mod reconcile;

pub use materialize::{default_scratch_dir, MaterializeReport, Materializer, RawImageAsset};
pub use naming::{build_filename, is_valid_card_id, parse_card_id, sanitize};
pub use reconcile::{reconcile, ReconcileReport};
