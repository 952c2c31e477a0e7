mod gradient;
mod utils;

pub use gradient::{Orientation, render_gradient};
use smart_leds::RGB8;
pub use utils::{
    Channel, ChannelOverflow, channel, lerp_channel, lerp_color, lerp_color_mirror,
    narrow_channel, rgb_from_u32, rgb_to_u32, sine_mod_bright,
};

pub type Rgb = RGB8;
