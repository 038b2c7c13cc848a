use std::{
    error::Error,
    fmt::Display,
    io::{stdout, ErrorKind, Write},
    process::ExitCode,
};

use clap::Parser;

use args::{Args, Mode};
use twiddle::{binomial, validate, Twiddle};

mod args;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args.mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(mode: Mode) -> Result<(), Box<dyn Error>> {
    let mut stdout = stdout().lock();

    match mode {
        Mode::Generate {
            size,
            limit,
            values,
        } => {
            let twiddle = Twiddle::new(values.len() as isize, size)?;
            print_combinations(&mut stdout, &twiddle, &values, limit)
        }
        Mode::Indices { n, m, limit } => {
            let twiddle = Twiddle::new(n, m)?;
            let positions: Vec<usize> = (0..twiddle.set_size()).collect();
            print_combinations(&mut stdout, &twiddle, &positions, limit)
        }
        Mode::Count { n, m } => print_count(&mut stdout, n, m),
    }
}

fn print_combinations<T: Clone + Display>(
    out: &mut impl Write,
    twiddle: &Twiddle,
    values: &[T],
    limit: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let mut combinations = twiddle.generate(values)?;
    let mut printed = 0;

    while !limit.is_some_and(|limit| printed >= limit) {
        let Some(combination) = combinations.advance() else {
            break;
        };

        let line = combination
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(",");

        // the reader went away, nothing left to do
        if let Err(error) = writeln!(out, "{line}") {
            if error.kind() == ErrorKind::BrokenPipe {
                return Ok(());
            }
            return Err(error.into());
        }

        printed += 1;
    }

    match out.flush() {
        Err(error) if error.kind() != ErrorKind::BrokenPipe => Err(error.into()),
        _ => Ok(()),
    }
}

fn print_count(out: &mut impl Write, n: isize, m: isize) -> Result<(), Box<dyn Error>> {
    let (set_size, combination_size) = validate(n, m)?;

    let Some(count) = binomial(set_size, combination_size) else {
        return Err(format!("C({n}, {m}) does not fit into {} bits", usize::BITS).into());
    };

    writeln!(out, "{count}")?;
    Ok(())
}

#[cfg(test)]
mod test {

    use std::io;

    use super::*;

    struct ClosedPipe {
        writes: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }
    }

    fn combinations(n: isize, m: isize, limit: Option<usize>) -> String {
        let twiddle = Twiddle::new(n, m).unwrap();
        let values = ["a", "b", "c", "d", "e"];
        let mut out = Vec::new();

        print_combinations(&mut out, &twiddle, &values[..n as usize], limit).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn count(n: isize, m: isize) -> Result<String, String> {
        let mut out = Vec::new();
        print_count(&mut out, n, m).map_err(|error| error.to_string())?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn line_format() {
        assert_eq!(combinations(3, 2, None), "b,c\na,c\na,b\n");
    }

    #[test]
    fn limit_cuts_output() {
        assert_eq!(combinations(4, 2, Some(2)), "c,d\na,d\n");
        assert_eq!(combinations(5, 3, Some(0)), "");
        assert_eq!(combinations(5, 3, Some(7)).lines().count(), 7);
    }

    #[test]
    fn limit_above_total() {
        assert_eq!(combinations(5, 2, Some(1000)).lines().count(), 10);
        assert_eq!(combinations(5, 2, Some(1000)), combinations(5, 2, None));
    }

    #[test]
    fn positions() {
        let twiddle = Twiddle::new(3, 2).unwrap();
        let positions: Vec<usize> = (0..3).collect();
        let mut out = Vec::new();

        print_combinations(&mut out, &twiddle, &positions, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1,2\n0,2\n0,1\n");
    }

    #[test]
    fn broken_pipe_is_quiet() {
        let twiddle = Twiddle::new(5, 2).unwrap();
        let mut out = ClosedPipe { writes: 0 };

        assert!(print_combinations(&mut out, &twiddle, &[1, 2, 3, 4, 5], None).is_ok());
        assert_eq!(out.writes, 1);
    }

    #[test]
    fn count_small() {
        assert_eq!(count(5, 2), Ok("10\n".to_string()));
        assert_eq!(count(1, 1), Ok("1\n".to_string()));
    }

    #[test]
    fn count_large_set() {
        assert_eq!(count(1 << 40, 1), Ok(format!("{}\n", 1u64 << 40)));
        assert_eq!(count(isize::MAX, 1), Ok(format!("{}\n", isize::MAX)));
    }

    #[test]
    fn count_overflow() {
        let error = count(200, 100).unwrap_err();
        assert!(error.contains("does not fit"), "{error}");
    }

    #[test]
    fn count_invalid() {
        let error = count(1, 2).unwrap_err();
        assert!(error.starts_with("Invalid parameters n = 1, m = 2"), "{error}");
    }
}
