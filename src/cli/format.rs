//! Format output dispatch helper

/// Dispatch on the output format.
///
/// The json branch is an expression returning `Result<()>`; the human and
/// records branches are blocks that print and cannot fail.
///
/// ```rust,ignore
/// output_by_format!(cli.format,
///     json => print_json(&value),
///     human => { println!("{}", title); },
///     records => { println!("H campus=1 mode=guide"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
