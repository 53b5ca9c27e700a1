pub use self::clip_segment_segment::{clip_segment_segment_with_normal, ClippingPoints};

mod clip_segment_segment;
