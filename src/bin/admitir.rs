//! Interactive admission-chance predictor.
//!
//! Prompts for the seven applicant fields on stdin, prints advisory range
//! warnings, then predicts against the artifacts in the current directory.
//! No flags, no environment variables.

use admitir::prelude::*;
use std::io::{self, BufRead, Write};

const PROMPTS: [&str; 7] = [
    "Enter GRE Score (260-340): ",
    "Enter TOEFL Score (80-120): ",
    "Enter University Rating (1-5): ",
    "Enter SOP (1-5): ",
    "Enter LOR (1-5): ",
    "Enter CGPA (1-10): ",
    "Enter Research (0 for No, 1 for Yes): ",
];

fn read_field(
    stdin: &mut impl BufRead,
    stdout: &mut impl Write,
    prompt: &str,
) -> io::Result<String> {
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn read_form(stdin: &mut impl BufRead, stdout: &mut impl Write) -> io::Result<ApplicantForm> {
    Ok(ApplicantForm {
        gre_score: read_field(stdin, stdout, PROMPTS[0])?,
        toefl_score: read_field(stdin, stdout, PROMPTS[1])?,
        university_rating: read_field(stdin, stdout, PROMPTS[2])?,
        sop: read_field(stdin, stdout, PROMPTS[3])?,
        lor: read_field(stdin, stdout, PROMPTS[4])?,
        cgpa: read_field(stdin, stdout, PROMPTS[5])?,
        research: read_field(stdin, stdout, PROMPTS[6])?,
    })
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();

    println!("Admission Chances Predictor");
    println!();

    let form = read_form(&mut stdin, &mut stdout)?;
    println!();

    // Advisory only: warnings are printed but the prediction still runs.
    for warning in validate_form(&form) {
        println!("{warning}");
    }

    match Predictor::open(".").and_then(|predictor| predictor.predict(&form)) {
        Ok(prediction) => println!("{prediction}"),
        Err(err @ AdmitirError::ArtifactUnavailable { .. }) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
        Err(err) => println!("{err}"),
    }

    Ok(())
}
