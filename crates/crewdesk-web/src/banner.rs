// File: src/banner.rs
// Purpose: Dismissible message banner state

/// How long a banner stays on screen before the page clears it.
pub const AUTO_CLEAR_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

/// One banner message. Rendered into the generic message area and cleared
/// by the page after [`AUTO_CLEAR_MS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: format!("✅ {}", text.into()),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: format!("❌ {}", text.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners_carry_their_marker() {
        assert_eq!(Banner::success("Empleado creado exitosamente!").text, "✅ Empleado creado exitosamente!");
        assert_eq!(Banner::error("Not found").text, "❌ Not found");
        assert_eq!(BannerKind::Error.css_class(), "error");
    }
}
