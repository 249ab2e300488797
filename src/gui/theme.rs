use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone, Debug)]
pub struct Palette {
    background: Color32,
    panel: Color32,
    raised: Color32,
    foreground: Color32,
    muted: Color32,
    accent: Color32,
    success: Color32,
    error: Color32,
}

impl Palette {
    fn slate_dark() -> Self {
        Self {
            background: Color32::from_rgb(30, 33, 43),
            panel: Color32::from_rgb(24, 26, 35),
            raised: Color32::from_rgb(46, 50, 64),
            foreground: Color32::from_rgb(226, 228, 236),
            muted: Color32::from_rgb(128, 136, 160),
            accent: Color32::from_rgb(96, 140, 240),
            success: Color32::from_rgb(88, 200, 120),
            error: Color32::from_rgb(240, 100, 100),
        }
    }

    fn slate_light() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 252),
            panel: Color32::from_rgb(238, 240, 245),
            raised: Color32::from_rgb(255, 255, 255),
            foreground: Color32::from_rgb(34, 36, 44),
            muted: Color32::from_rgb(110, 116, 136),
            accent: Color32::from_rgb(37, 99, 235),
            success: Color32::from_rgb(34, 150, 80),
            error: Color32::from_rgb(205, 50, 50),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self { dark: Palette::slate_dark(), light: Palette::slate_light() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).accent
    }

    pub fn success(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).success
    }

    pub fn error(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).error
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).muted
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).strong().color(self.palette(ctx).accent)
    }

    pub fn required_marker(&self, ctx: &egui::Context) -> RichText {
        RichText::new("*").color(self.palette(ctx).error)
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    apply_palette(ctx, &theme.dark, true);
    apply_palette(ctx, &theme.light, false);
}

fn apply_palette(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (mut visuals, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    visuals.panel_fill = palette.panel;
    visuals.window_fill = palette.background;
    visuals.extreme_bg_color = palette.raised;
    visuals.faint_bg_color = palette.background;
    visuals.code_bg_color = palette.raised;
    visuals.hyperlink_color = palette.accent;
    visuals.error_fg_color = palette.error;
    visuals.selection.bg_fill = palette.accent.linear_multiply(0.6);
    visuals.widgets.noninteractive.fg_stroke =
        Stroke { color: palette.foreground, ..visuals.widgets.noninteractive.fg_stroke };
    visuals.widgets.inactive.bg_fill = palette.raised;
    visuals.widgets.hovered.bg_stroke =
        Stroke { color: palette.accent, ..visuals.widgets.hovered.bg_stroke };
    visuals.widgets.active.bg_stroke =
        Stroke { color: palette.accent, ..visuals.widgets.active.bg_stroke };

    ctx.set_visuals_of(variant, visuals);
}
