//! Interactive session handler.
//!
//! Reads one command per line and drives a [`CalculatorSession`]. Errors are
//! reported and the session continues, so a typo never discards the stored
//! result or selections.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crater_energy_lib::{
    CalculatorSession, ContactOption, GeometryMode, ImpactType, MaterialTable,
};

use crate::output::styled_energy;
use crate::terminal::ColorPalette;

const HELP: &str = "\
Commands:
  contact <key|cm>           select one of the 8 contact options
  geometry <circular|elliptical>
  diameter <cm>              crater diameter (circular mode)
  width <cm> / height <cm>   crater width and height (elliptical mode)
  depth <cm>                 penetration depth/thickness
  impact <normal|clean>
  material <id>
  calc                       calculate and store the energy
  toggle                     switch between Auto and Full display
  reset                      clear selection, inputs and result
  show                       print the current state
  help | quit";

/// Handle the session subcommand using stdin and stdout.
pub fn handle_session(table: &MaterialTable) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        table,
        stdin.lock(),
        &mut stdout.lock(),
        &ColorPalette::detect(),
    )
}

/// Run a session reading commands from `input` until EOF or `quit`.
pub fn run_session<R: BufRead, W: Write>(
    table: &MaterialTable,
    input: R,
    out: &mut W,
    palette: &ColorPalette,
) -> Result<()> {
    let mut session = CalculatorSession::new(table);
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.collect::<Vec<_>>().join(" ");

        match apply_command(&mut session, &command.to_lowercase(), &arg, palette) {
            Ok(Step::Continue(message)) => writeln!(out, "{message}")?,
            Ok(Step::Quit) => break,
            Err(message) => writeln!(out, "{}Error: {message}{}", palette.error, palette.reset)?,
        }
    }

    Ok(())
}

enum Step {
    Continue(String),
    Quit,
}

/// Parse a centimeter value. Blank clears the field; unparsable text is kept as NaN
/// so the calculation reports it as an invalid dimension.
fn parse_cm(arg: &str) -> Option<f64> {
    if arg.is_empty() {
        None
    } else {
        Some(arg.parse().unwrap_or(f64::NAN))
    }
}

fn apply_command(
    session: &mut CalculatorSession<'_>,
    command: &str,
    arg: &str,
    palette: &ColorPalette,
) -> std::result::Result<Step, String> {
    let message = match command {
        "contact" => {
            let option: ContactOption = arg.parse().map_err(|e| format!("{e}"))?;
            session.select_contact(option);
            format!("Contact: {option}")
        }
        "geometry" => {
            let mode: GeometryMode = arg.parse()?;
            session.switch_geometry(mode);
            format!("Geometry: {}", mode.label())
        }
        "diameter" => {
            session.set_crater_diameter(parse_cm(arg));
            "Crater diameter set.".to_string()
        }
        "width" => {
            session.set_crater_width(parse_cm(arg));
            "Crater width set.".to_string()
        }
        "height" => {
            session.set_crater_height(parse_cm(arg));
            "Crater height set.".to_string()
        }
        "depth" => {
            session.set_depth(parse_cm(arg));
            "Depth set.".to_string()
        }
        "impact" => {
            let impact: ImpactType = arg.parse()?;
            session.set_impact(impact);
            format!("Impact: {}", impact.label())
        }
        "material" => {
            session.set_material(arg).map_err(|e| format!("{e}"))?;
            format!("Material: {}", session.material())
        }
        "calc" | "calculate" => {
            let (_, energy) = session.calculate().map_err(|e| format!("{e}"))?;
            format!("Energy: {}", styled_energy(&energy, palette))
        }
        "toggle" => {
            let energy = session.toggle_display_mode();
            format!(
                "{}. Energy: {}",
                session.display_mode().label(),
                styled_energy(&energy, palette)
            )
        }
        "reset" => {
            let energy = session.reset();
            format!("Reset. Energy: {}", styled_energy(&energy, palette))
        }
        "show" => describe_state(session, palette),
        "help" | "?" => HELP.to_string(),
        "quit" | "exit" => return Ok(Step::Quit),
        other => return Err(format!("unknown command '{other}'; type 'help'")),
    };
    Ok(Step::Continue(message))
}

fn describe_state(session: &CalculatorSession<'_>, palette: &ColorPalette) -> String {
    let show = |value: Option<f64>| value.map_or_else(|| "—".to_string(), |v| format!("{v} cm"));
    let inputs = session.inputs();
    let contact = session
        .contact()
        .map_or_else(|| "—".to_string(), |c| c.to_string());

    let crater = match session.geometry_mode() {
        GeometryMode::Circular => format!("diameter {}", show(inputs.diameter_cm)),
        GeometryMode::Elliptical => format!(
            "width {}, height {}",
            show(inputs.width_cm),
            show(inputs.height_cm)
        ),
    };

    format!(
        "Contact: {contact}\nCrater: {crater}\nDepth: {}\nImpact: {}\nMaterial: {}\n{}\nEnergy: {}",
        show(inputs.depth_cm),
        session.impact().label(),
        session.material(),
        session.display_mode().label(),
        styled_energy(&session.render(), palette)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        run_session(
            MaterialTable::builtin(),
            script.as_bytes(),
            &mut out,
            &ColorPalette::plain(),
        )
        .expect("session runs");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn calculates_reference_scenario() {
        let out = run("contact pipe\ndiameter 10\ndepth 2\nmaterial steel\ncalc\n");
        assert!(out.contains("Contact: Target part — Pipe end (5 cm)"));
        assert!(out.contains("Energy: 104.72 kJ"));
    }

    #[test]
    fn calc_without_contact_reports_error() {
        let out = run("diameter 10\ndepth 2\ncalc\n");
        assert!(out.contains("Error: no contact size selected"));
    }

    #[test]
    fn toggle_and_reset_keep_display_mode() {
        let out = run(
            "contact pipe\ndiameter 10\ndepth 2\nmaterial steel\ncalc\ntoggle\nreset\nshow\n",
        );
        assert!(out.contains("Format: Full. Energy: 104,720 J"));
        assert!(out.contains("Reset. Energy: 0 J"));
        assert!(out.contains("Material: steel"));
        assert!(out.contains("Contact: —"));
        assert!(out.lines().any(|l| l == "Format: Full"));
    }

    #[test]
    fn non_numeric_dimension_fails_at_calculation() {
        let out = run("contact fist\ndiameter wide\ndepth 1\ncalc\n");
        assert!(out.contains("Error: crater diameter must be a finite positive number"));
    }

    #[test]
    fn elliptical_mode_uses_width_and_height() {
        let out = run(
            "contact rivet\ngeometry elliptical\nwidth 4\nheight 2\ndepth 1\nimpact clean\nmaterial brick\ncalc\n",
        );
        // π · 0.02 · 0.01 · 0.01 m³ × 15 MPa ≈ 94.25 J
        assert!(out.contains("Energy: 94 J"), "{out}");
    }

    #[test]
    fn quit_stops_processing() {
        let out = run("quit\ncontact fist\n");
        assert!(!out.contains("Contact:"));
    }

    #[test]
    fn colored_palette_marks_errors_and_energy() {
        let mut out = Vec::new();
        run_session(
            MaterialTable::builtin(),
            "explode\nreset\n".as_bytes(),
            &mut out,
            &ColorPalette::colored(),
        )
        .expect("session runs");
        let out = String::from_utf8(out).expect("utf8");
        assert!(out.contains("\x1b[31mError: unknown command"));
        assert!(out.contains("\x1b[1;97m0\x1b[0m \x1b[36mJ\x1b[0m"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let out = run("explode\n");
        assert!(out.contains("Error: unknown command 'explode'"));
    }
}
