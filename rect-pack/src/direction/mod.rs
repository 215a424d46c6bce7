mod angle_bins;
mod major_direction;

#[doc(inline)]
pub use angle_bins::AngleBins;
#[doc(inline)]
pub use major_direction::{find_major_direction, find_major_directions};
