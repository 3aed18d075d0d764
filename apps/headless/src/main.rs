use anyhow::Result;
use card_core::{
    effects::{RecordingEmitter, RecordingHaptics},
    CardCopy, HapticDevice, InteractionController, NoHaptics,
};
use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

/// Replays a scripted sequence of card interactions and prints each resulting
/// view as one JSON object per line.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value = "Lucia")]
    recipient: String,
    /// Pretend the device can vibrate.
    #[arg(long)]
    haptics: bool,
    #[arg(value_enum, required = true)]
    steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
enum Step {
    Evade,
    Yes,
    Open,
    Close,
}

struct Script<'a> {
    controller: InteractionController,
    rng: StdRng,
    emitter: RecordingEmitter,
    haptics: &'a mut dyn HapticDevice,
    copy: CardCopy,
    viewport_width: f32,
}

impl Script<'_> {
    fn apply(&mut self, step: Step) -> Value {
        let transition = match step {
            Step::Evade => {
                self.controller
                    .evade_negative(&mut self.rng, self.viewport_width, self.haptics)
            }
            Step::Yes => self.controller.select_affirmative(&mut self.emitter),
            Step::Open => self.controller.open_letter(),
            Step::Close => self.controller.close_letter(),
        };
        json!({
            "step": step,
            "transition": transition,
            "stage": self.controller.stage(),
            "evasion_count": self.controller.state().evasion_count,
            "view": self.controller.view(&self.copy),
        })
    }
}

fn run_script(args: &Args, haptics: &mut dyn HapticDevice) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut controller = InteractionController::new();
    controller.initialize(&mut rng);

    let mut script = Script {
        controller,
        rng,
        emitter: RecordingEmitter::default(),
        haptics,
        copy: CardCopy::for_recipient(args.recipient.clone()),
        viewport_width: args.viewport_width,
    };

    let mut lines: Vec<Value> = args.steps.iter().map(|step| script.apply(*step)).collect();
    lines.push(json!({
        "summary": {
            "confetti_bursts": script.emitter.bursts.len(),
            "accepted": script.controller.state().accepted,
            "sparkling": script.controller.state().sparkling,
        }
    }));
    lines
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let lines = if args.haptics {
        let mut haptics = RecordingHaptics::available();
        let lines = run_script(&args, &mut haptics);
        tracing::info!(pulses = haptics.pulses.len(), "haptic pulses requested");
        lines
    } else {
        run_script(&args, &mut NoHaptics)
    };

    for line in lines {
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(width: &str, steps: &[&str]) -> Args {
        let mut argv = vec!["valentine-headless", "--viewport-width", width, "--seed", "3"];
        argv.extend_from_slice(steps);
        Args::try_parse_from(argv).expect("parse args")
    }

    #[test]
    fn ten_evasions_on_wide_viewport_end_hidden_under_yes() {
        let steps = ["evade"; 10];
        let lines = run_script(&args("1280", &steps), &mut NoHaptics);
        assert_eq!(lines.len(), 11);

        for line in &lines[..9] {
            let pos = &line["view"]["negative_position"];
            let x = pos["x"].as_f64().expect("x");
            assert!((50.0..=200.0).contains(&x));
            assert_eq!(pos["opacity"], 1.0);
        }
        let last = &lines[9]["view"];
        assert_eq!(last["negative_position"]["x"], -140.0);
        assert_eq!(last["negative_position"]["opacity"], 0.0);
        assert_eq!(last["negative_interactive"], false);
        assert_eq!(last["negative_label"], "You can't say No! ❤️");
    }

    #[test]
    fn acceptance_then_letter_round_trip() {
        let lines = run_script(
            &args("390", &["evade", "yes", "open", "close", "yes"]),
            &mut NoHaptics,
        );
        assert_eq!(lines[1]["stage"], "celebrating");
        assert_eq!(lines[2]["stage"], "letter_open");
        assert_eq!(lines[2]["view"]["stage"], "letter");
        assert_eq!(lines[3]["stage"], "celebrating");
        assert_eq!(lines[4]["transition"]["outcome"], "ignored");
        assert_eq!(lines[4]["transition"]["reason"], "already_accepted");
        assert_eq!(lines[4]["evasion_count"], 1);
        assert_eq!(lines[5]["summary"]["confetti_bursts"], 1);
        assert_eq!(lines[5]["summary"]["sparkling"], true);
    }

    #[test]
    fn rejects_unknown_steps() {
        let argv = ["valentine-headless", "dance"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
