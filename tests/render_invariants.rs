use std::sync::Arc;

use labeld::canvas::{Canvas, Color};
use labeld::label::{Border, LabelBuilder, LabelStyle, FALLBACK_TEXT, LINE_HEIGHT};
use labeld::metrics::MetricsCfg;
use labeld::FontFace;

fn builder() -> LabelBuilder {
    LabelBuilder::new(Arc::new(FontFace::bitmap_fallback()))
}

#[test]
fn border_invariant_holds_for_every_frame_pixel() {
    let sizes = [(16u32, 9u32, 1u32), (192, 64, 3), (40, 40, 5)];
    for (w, h, b) in sizes {
        let mut canvas = Canvas::new(w, h);
        let fill = Color::rgb(7, 7, 7);
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                canvas.set_pixel(x, y, fill);
            }
        }
        let border = Color::rgb(200, 100, 50);
        canvas.draw_border(b, border);
        for x in 0..w {
            for y in 0..h {
                let expect = x < b || x >= w - b || y < b || y >= h - b;
                let got = canvas.pixel(x as i32, y as i32).unwrap();
                if expect {
                    assert_eq!(got, border, "{}x{} b={} frame pixel ({}, {})", w, h, b, x, y);
                } else {
                    assert_eq!(got, fill, "{}x{} b={} interior pixel ({}, {})", w, h, b, x, y);
                }
            }
        }
    }
}

#[test]
fn crosshair_covers_midlines_regardless_of_prior_content() {
    let b = builder();
    let style = LabelStyle {
        crosshair: true,
        ..LabelStyle::default()
    };
    let canvas = b.render_fixed((192, 64), "Hello World", &style).unwrap();
    for x in 0..192i32 {
        assert_eq!(canvas.pixel(x, 32).unwrap(), Color::DEBUG_RED);
    }
    for y in 0..64i32 {
        assert_eq!(canvas.pixel(96, y).unwrap(), Color::DEBUG_RED);
    }
}

#[test]
fn empty_input_never_yields_an_empty_canvas() {
    let b = builder();
    for text in ["", "   "] {
        let canvas = b.render(text, &LabelStyle::default()).unwrap();
        assert_eq!(canvas.height(), LINE_HEIGHT);
        assert!(
            canvas.pixels().iter().any(|&p| p != Color::TRANSPARENT),
            "input {:?} rendered an empty canvas",
            text
        );
        // Width matches a measurement of the fallback string, not of the
        // empty input.
        let expected = MetricsCfg::default().measure_width(
            &FontFace::bitmap_fallback(),
            72.0,
            FALLBACK_TEXT,
        );
        assert_eq!(canvas.width(), expected);
    }
}

#[test]
fn hello_world_scenario() {
    // "Hello_World" routes to "Hello World": 11 characters measured, shadow
    // below/right of the foreground, foreground in the default green.
    let text = labeld::server::label_from_path("/Hello_World.png");
    assert_eq!(text, "Hello World");

    let b = builder();
    let canvas = b.render(&text, &LabelStyle::default()).unwrap();
    let cfg = MetricsCfg::default();
    assert_eq!(canvas.width(), 11 * cfg.fallback_char_width);

    let green = Color::rgb(60, 128, 60);
    let has_foreground = canvas
        .pixels()
        .iter()
        .any(|&p| (p.r, p.g, p.b) == (60, 128, 60) && p.a > 0);
    assert!(has_foreground, "no foreground pixels found");
    assert!(canvas.pixels().iter().any(|&p| p != green
        && p != Color::TRANSPARENT
        && (p.r, p.g, p.b) == (0, 0, 0)),
        "no shadow pixels found");
}

#[test]
fn border_style_sits_on_top_of_rendered_text() {
    let b = builder();
    let style = LabelStyle {
        border: Some(Border {
            width: 3,
            color: Color::rgb(1, 2, 3),
        }),
        ..LabelStyle::default()
    };
    let canvas = b.render("WWWWWWWWWW", &style).unwrap();
    let w = canvas.width();
    for x in 0..w as i32 {
        for y in 0..3i32 {
            assert_eq!(canvas.pixel(x, y).unwrap(), Color::rgb(1, 2, 3));
        }
    }
}
