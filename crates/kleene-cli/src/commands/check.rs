use kleene_lib::{Error, RegexBuilder};

pub struct CheckArgs {
    pub regex: String,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let builder = RegexBuilder::new().with_recursion_fuel(Some(args.fuel));

    match builder.parse(&args.regex) {
        Ok(_) => {}
        Err(Error::RegexParse(diagnostics)) => {
            eprint!("{}", diagnostics.render_colored(&args.regex, args.color));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    // Silent on success (like cargo check)
}
