use super::state::AnimationState;

/// Inline style values for one frame, formatted for the DOM.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoStyle {
    pub transform: String,
    pub gap: String,
    pub font_size: String,
}

impl VideoStyle {
    pub fn from_state(s: &AnimationState) -> Self {
        Self {
            transform: format!(
                "translateY({}px) translateX({}px) scale({})",
                s.current_translate_y, s.current_mouse_x, s.scale
            ),
            gap: format!("{}em", s.gap),
            font_size: format!("{}px", s.font_size),
        }
    }
}

/// Properties of `next` that differ from what was written last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleDiff {
    pub transform: bool,
    pub gap: bool,
    pub font_size: bool,
}

impl StyleDiff {
    pub fn between(prev: Option<&VideoStyle>, next: &VideoStyle) -> Self {
        match prev {
            None => Self {
                transform: true,
                gap: true,
                font_size: true,
            },
            Some(p) => Self {
                transform: p.transform != next.transform,
                gap: p.gap != next.gap,
                font_size: p.font_size != next.font_size,
            },
        }
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.transform || self.gap || self.font_size
    }
}
