use std::{
    io,
    process::exit,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use anyhow::{anyhow, bail, ensure, Context};
use colored::Colorize;
use libautomata::{
    preset::Preset,
    rule::RuleSet,
    transition::CellModel,
    viewport::{self, Viewport},
};
use strum::IntoEnumIterator;

use crate::{
    config::frame_interval,
    display::{self, Palette},
    ticker::{nature::NatureTicker, TickerHost},
    State,
};

const HELP: &str = "\
step [n]              advance n generations (default 1)
run [fps]             keep stepping at fps generations per second
stop                  stop running
rate <fps>            change the running speed
random [percent]      new random grid of the current size
clear                 kill every cell
resize <w> <h>        change the grid size, keeping the top-left cells
patterns              list the available patterns
load <name>           replace the grid with a pattern
presets               list the rule presets
preset <name>         select a preset by key or full name
born [n..]            set the born counts (switches to custom)
survive [n..]         set the survive counts (switches to custom)
rule <B../S..>        set both sets at once, e.g. B36/S23
mode <two|three>      two-state or three-state cells
totalistic <on|off>   count a live cell as its own neighbor
zoom <1-5>            zoom level of the view
palette <name>        colours used by the view
show                  print the status line and the view
status                print the status line
dump-config           print the current settings as a config file
exit";

pub fn run_cli(state_arc: Arc<RwLock<State>>) -> anyhow::Result<()> {
    for line_res in io::stdin().lines() {
        let line = line_res.context("Couldn't read stdin")?;
        let args = line.split_whitespace();

        if let Err(e) = handle_cmd(state_arc.clone(), args) {
            eprintln!("{} {e:?}", "!".red().bold());
        }
    }

    stop_ticker(&state_arc)?;
    Ok(())
}

fn handle_cmd<'a, I>(state_arc: Arc<RwLock<State>>, mut args: I) -> anyhow::Result<()>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            write_state(&state_arc)?.simulation.tick_n(times);
        }

        "run" => {
            let mut state = write_state(&state_arc)?;

            let fps = match args.next() {
                Some(fps) => fps.parse::<u32>()?,
                None => state.fps,
            };
            let interval = frame_interval(fps)?;
            state.fps = fps;

            match &state.ticker {
                Some(ticker) => ticker.set_interval(interval),
                None => {
                    log::info!("Running at {fps} generations per second");
                    let ticker =
                        TickerHost::start(state_arc.clone(), interval, Box::new(NatureTicker));
                    state.ticker = Some(ticker);
                }
            }
        }

        "stop" => {
            if !stop_ticker(&state_arc)? {
                bail!("Not running");
            }
        }

        "rate" => {
            let fps = args.next().context("missing fps")?.parse::<u32>()?;
            let interval = frame_interval(fps)?;

            let mut state = write_state(&state_arc)?;
            state.fps = fps;
            if let Some(ticker) = &state.ticker {
                ticker.set_interval(interval);
            }
        }

        "random" => {
            stop_ticker(&state_arc)?;

            let mut state = write_state(&state_arc)?;
            let live_percentage = match args.next() {
                Some(percentage) => percentage.parse::<f64>()?,
                None => state.random_live_percentage,
            };

            state.simulation.randomize(live_percentage)?;
        }

        "clear" => {
            write_state(&state_arc)?.simulation.grid.clear();
        }

        "resize" => {
            let width = args.next().context("missing width")?.parse::<usize>()?;

            let height = args.next().context("missing height")?.parse::<usize>()?;

            stop_ticker(&state_arc)?;

            let mut state = write_state(&state_arc)?;
            let resized = state.simulation.grid.resized(width, height)?;
            state.simulation.reset(resized);
        }

        "patterns" => {
            let state = read_state(&state_arc)?;
            for name in state.patterns.list_patterns() {
                println!("{name}");
            }
        }

        "load" => {
            let name = args.next().context("missing pattern name")?;

            stop_ticker(&state_arc)?;

            let mut state_guard = write_state(&state_arc)?;
            let state = &mut *state_guard;
            state
                .simulation
                .load_pattern(state.patterns.as_ref(), name)
                .with_context(|| format!("Couldn't load pattern {name:?}"))?;
        }

        "presets" => {
            for preset in Preset::iter() {
                match preset.rule_set() {
                    Some(rule_set) => println!("{:12} {preset} = {rule_set}", preset.key()),
                    None => println!("{:12} {preset}", preset.key()),
                }
            }
        }

        "preset" => {
            let name = args.collect::<Vec<_>>().join(" ");
            let preset = name
                .parse::<Preset>()
                .with_context(|| format!("Unknown preset {name:?}"))?;

            write_state(&state_arc)?.simulation.rules.select(preset);
        }

        "born" => {
            let born = parse_counts(args)?;
            write_state(&state_arc)?.simulation.rules.set_born(born);
        }

        "survive" => {
            let survive = parse_counts(args)?;
            write_state(&state_arc)?.simulation.rules.set_survive(survive);
        }

        "rule" => {
            let rule_set = args.next().context("missing rule")?.parse::<RuleSet>()?;
            write_state(&state_arc)?.simulation.rules.set_custom(rule_set);
        }

        "mode" => {
            let model = args
                .next()
                .context("missing mode")?
                .parse::<CellModel>()
                .context("expected two or three")?;

            write_state(&state_arc)?.simulation.transition.model = model;
        }

        "totalistic" => {
            let totalistic = match args.next().context("missing on/off")? {
                "on" | "true" => true,
                "off" | "false" => false,
                other => bail!("expected on or off, got {other:?}"),
            };

            write_state(&state_arc)?.simulation.transition.totalistic = totalistic;
        }

        "zoom" => {
            let zoom = args.next().context("missing zoom")?.parse::<usize>()?;
            ensure!(
                (viewport::MIN_ZOOM..=viewport::MAX_ZOOM).contains(&zoom),
                "zoom must be between {} and {}",
                viewport::MIN_ZOOM,
                viewport::MAX_ZOOM
            );

            write_state(&state_arc)?.zoom = zoom;
        }

        "palette" => {
            let palette = args
                .next()
                .context("missing palette")?
                .parse::<Palette>()
                .with_context(|| {
                    format!(
                        "expected one of {}",
                        Palette::iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ")
                    )
                })?;

            write_state(&state_arc)?.palette = palette;
        }

        "show" => {
            let state = read_state(&state_arc)?;
            let grid = &state.simulation.grid;
            let viewport = Viewport::centered(grid.width(), grid.height(), state.zoom)?;

            println!("{}", display::status_line(&state.simulation).bold());
            print!("{}", display::render_view(grid, &viewport, state.palette));
        }

        "status" => {
            let state = read_state(&state_arc)?;
            println!("{}", display::status_line(&state.simulation).bold());
        }

        "dump-config" => {
            let config = read_state(&state_arc)?.config();
            println!(
                "{}",
                serde_json::to_string_pretty(&config).context("Couldn't serialize config")?
            );
        }

        "help" => {
            println!("{HELP}");
        }

        "exit" => {
            stop_ticker(&state_arc)?;
            exit(0);
        }

        other => bail!("Unknown command {other:?}, try help"),
    }

    println!("{}", "OK".green());
    Ok(())
}

fn read_state(state_arc: &Arc<RwLock<State>>) -> anyhow::Result<RwLockReadGuard<'_, State>> {
    state_arc.read().map_err(|_| anyhow!("State lock poisoned"))
}

fn write_state(state_arc: &Arc<RwLock<State>>) -> anyhow::Result<RwLockWriteGuard<'_, State>> {
    state_arc.write().map_err(|_| anyhow!("State lock poisoned"))
}

/// Stops the ticker if one is running, returns whether it was.
fn stop_ticker(state_arc: &Arc<RwLock<State>>) -> anyhow::Result<bool> {
    let ticker_thread = write_state(state_arc)?.ticker.take().map(TickerHost::stop);

    match ticker_thread {
        Some(ticker_thread) => {
            ticker_thread
                .join()
                .map_err(|_| anyhow!("Ticker thread panicked"))?;
            log::info!("Stopped");
            Ok(true)
        }
        None => Ok(false),
    }
}

fn parse_counts<'a, I>(args: I) -> anyhow::Result<Vec<u8>>
where
    I: Iterator<Item = &'a str>,
{
    args.map(|arg| {
        arg.parse::<u8>()
            .with_context(|| format!("invalid neighbor count {arg:?}"))
    })
    .collect()
}
