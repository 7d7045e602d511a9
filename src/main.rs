// What you SEE:
// • A white card with a dashed border; hold Left Mouse on it to sign.
// • "Sign Here" is shown until something is drawn.
// • C clears the signature. S saves the latest signature PNG. ESC quits.
// • Resizing the window resizes the card, which wipes the signature.

mod draw;

use clap::Parser;
use draw::{
    BORDER_GRAY, CARD_WHITE, Drawer, HINT_GRAY, composite_surface, draw_dashed_frame,
    draw_text_5x7, fill, text_width_5x7,
};
use env_logger::Env;
use log::{info, warn};
use signature_pad::{
    Artifact, ArtifactSink, ContainerMetrics, Error, FrameBuffer, InputEvent, PadConfig,
    PointerEvent, SignaturePad, SurfaceRect, ViewportEvents,
};
use std::path::PathBuf;

const HEADER_H: usize = 20; // band above the card (help line)
const FOOTER_H: usize = 20; // band below the card (status line)
const TEXT_DARK: u32 = 0x00_37_41_51;

#[derive(Parser, Debug)]
#[command(name = "signature-pad", about = "Free-hand signature capture demo")]
struct Args {
    /// JSON file with pad settings (surface_height, line_width, stroke_color, placeholder)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where `S` writes the signature PNG
    #[arg(long, default_value = "signature.png")]
    out: PathBuf,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 640)]
    width: usize,
}

/// Stands in for the consent form: keeps only the latest signature.
#[derive(Default)]
struct FormState {
    signature: Option<Artifact>,
}

impl ArtifactSink for FormState {
    fn on_artifact_change(&mut self, artifact: Option<Artifact>) {
        self.signature = artifact;
    }
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PadConfig::load(path)?,
        None => PadConfig::default(),
    };
    let surface_h = config.surface_height;

    /* --- Window + pad setup --- */
    let initial_h = HEADER_H + surface_h + FOOTER_H;
    let mut drawer = Drawer::new("Signature Pad", args.width, initial_h)?;
    let viewport = ViewportEvents::new();
    let mut pad = SignaturePad::new(config, FormState::default());

    let (mut win_w, mut win_h) = drawer.size();
    pad.initialize(ContainerMetrics { width: win_w }, &viewport);
    pad.set_origin(SurfaceRect { left: 0.0, top: HEADER_H as f32 });

    let mut screen = FrameBuffer::new(win_w, win_h);
    let mut was_down = false;
    let mut last_pos: Option<(f32, f32)> = None;
    let mut status = String::new();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Follow the window size (the container). The viewport delivers it to every
              mounted pad; ours applies it before handling input. */
        let (w, h) = drawer.size();
        if w != win_w {
            viewport.resize(ContainerMetrics { width: w });
            pad.process_viewport_events();
        }
        if (w, h) != (win_w, win_h) {
            screen = FrameBuffer::new(w, h);
            (win_w, win_h) = (w, h);
        }

        /* 2) Mouse -> pad events. Leaving the card ends the stroke like a release. */
        let down = drawer.left_mouse_down();
        let pos = drawer.mouse_pos().filter(|&(_, y)| {
            y >= HEADER_H as f32 && y < (HEADER_H + surface_h) as f32
        });
        match pos {
            Some((x, y)) if down && !was_down => {
                pad.handle(InputEvent::Down(PointerEvent::mouse(x, y)))
            }
            Some((x, y)) if down && last_pos != pos => {
                pad.handle(InputEvent::Move(PointerEvent::mouse(x, y)))
            }
            Some(_) if !down && was_down => pad.handle(InputEvent::Up),
            None if pad.is_drawing() => pad.handle(InputEvent::Leave),
            _ => {}
        }
        was_down = down;
        last_pos = pos;

        /* 3) Keys */
        if drawer.c_pressed_once() {
            pad.clear();
            status.clear();
        }
        if drawer.s_pressed_once() {
            status = match &pad.sink().signature {
                Some(sig) => match std::fs::write(&args.out, sig.png_bytes()) {
                    Ok(()) => {
                        info!("signature saved to {}", args.out.display());
                        String::from("saved")
                    }
                    Err(e) => {
                        warn!("could not save signature to {}: {e}", args.out.display());
                        String::from("save failed - see log")
                    }
                },
                None => {
                    warn!("no signature to save");
                    String::from("please sign before saving")
                }
            };
        }

        /* 4) Draw: background, card, hint, help + status lines */
        fill(&mut screen, CARD_WHITE);
        if let Some(surface) = pad.surface() {
            composite_surface(&mut screen, surface, 0, HEADER_H as i32);
            let (sw, sh) = (surface.width as i32, surface.height as i32);
            draw_dashed_frame(&mut screen, 0, HEADER_H as i32, sw, sh, BORDER_GRAY);
            if pad.show_placeholder() {
                let text = pad.placeholder();
                let x = (surface.width as i32 - text_width_5x7(text)) / 2;
                let y = HEADER_H as i32 + (surface.height as i32 - 7) / 2;
                draw_text_5x7(&mut screen, x, y, text, HINT_GRAY);
            }
        }
        draw_text_5x7(&mut screen, 6, 7, "C: CLEAR  S: SAVE  ESC: QUIT", TEXT_DARK);
        if !status.is_empty() {
            let y = (HEADER_H + surface_h + 7) as i32;
            draw_text_5x7(&mut screen, 6, y, &status, TEXT_DARK);
        }

        /* 5) Present */
        drawer.present(&screen)?;
    }

    pad.teardown();
    Ok(())
}
