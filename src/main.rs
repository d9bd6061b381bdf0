use std::env;
use std::io;
use std::process;
use std::thread;
use std::time::Duration;

use typetune::playback::{Clock, ConsoleSynth, SystemClock};
use typetune::{MelodyWidget, WidgetConfig};

const USAGE: &str = concat!(
    "Usage: typetune [--config <file.yaml>] <text>\n",
    "       typetune --play [--config <file.yaml>] <text>",
);

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut play = false;
    let mut config_path: Option<&String> = None;
    let mut words: Vec<&str> = Vec::new();

    // Parse flags
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--play" => play = true,
            "--config" => match iter.next() {
                Some(path) => config_path = Some(path),
                None => {
                    eprintln!("{}", USAGE);
                    process::exit(1);
                }
            },
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            _ => words.push(arg.as_str()),
        }
    }

    if words.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }
    let text = words.join(" ");

    let config = match config_path {
        Some(path) => match WidgetConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => WidgetConfig::default(),
    };

    if play {
        if !play_text(&text, config) {
            process::exit(1);
        }
    } else {
        match typetune::schedule_json(&text) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error writing sequence: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Play `text` on the console. Returns `false` if there was nothing to play.
///
/// The widget is dropped, silencing and releasing the synth, before this returns.
fn play_text(text: &str, config: WidgetConfig) -> bool {
    let synth = ConsoleSynth::new(io::stdout());
    let mut widget = MelodyWidget::mount(synth, SystemClock::new(), config);
    widget.replace_text(text);

    if !widget.start_playback() {
        eprintln!("Nothing to play");
        return false;
    }

    let mut shown = None;
    while widget.is_playing() {
        widget.tick();
        let cursor = widget.cursor();
        if cursor != shown {
            if let Some(index) = cursor {
                println!("  {}", highlight(text, index));
            }
            shown = cursor;
        }

        // Nothing can change before the next trigger
        let clock = widget.clock();
        let wait = clock.next_due().map_or(0.0, |due| due - clock.now());
        thread::sleep(Duration::from_secs_f64(wait.max(0.0)));
    }
    true
}

/// The text with the character at `index` bracketed
fn highlight(text: &str, index: usize) -> String {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            if i == index {
                format!("[{}]", c)
            } else {
                c.to_string()
            }
        })
        .collect()
}
