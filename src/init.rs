//! Initialization that needs to be done on startup

/// Registers decoders that are not built into `image` itself
pub fn init() {
    #[cfg(feature = "jxl")]
    jxl_oxide::integration::register_image_decoding_hook();
}
