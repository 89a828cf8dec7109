pub const WINDOW_TITLE: &str = "Cat Viewer";
pub const WINDOW_WIDTH: f32 = 850.0;
pub const WINDOW_HEIGHT: f32 = 850.0;

/// Wider images are downscaled to this width before display.
pub const MAX_IMAGE_WIDTH: u32 = 800;

pub const SUGGESTION_LIST_HEIGHT: f32 = 120.0;
pub const MAX_SUGGESTIONS: usize = 200;
