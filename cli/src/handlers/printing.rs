//! Handles displaying catalogues and discs in a human readable format.

use std::fmt::Write;

use disc_catalogue::{Catalogue, Disc};

/// One line per disc: its index, album and artist, then whichever passengers it has.
pub fn disc(index: usize, disc: &Disc) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    write!(output, "{index}: {disc}")?;

    let details = [
        disc.year.map(|year| year.to_string()),
        disc.genre.as_deref().map(ToString::to_string),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();
    if !details.is_empty() {
        write!(output, " ({})", details.join(", "))?;
    }
    if let Some(title) = &disc.title {
        write!(output, " - {title}")?;
    }

    Ok(output)
}

pub fn catalogue(catalogue: &Catalogue) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(output, "Catalogue ({} discs): [", catalogue.count())?;
    for (index, item) in catalogue.iter().enumerate() {
        writeln!(output, "\t{},", disc(index, item)?)?;
    }
    writeln!(output, "]")?;

    Ok(output)
}

pub fn count(catalogue: &Catalogue) -> Result<String, std::fmt::Error> {
    let mut output = String::new();
    write!(
        output,
        "{} disc(s), capacity {}",
        catalogue.count(),
        catalogue.capacity()
    )?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_str_eq;
    use rstest::rstest;

    #[rstest]
    #[case::plain(Disc::new("Blue", "Joni Mitchell"), "0: \"Blue\" by Joni Mitchell")]
    #[case::year(Disc::new("Blue", "Joni Mitchell").with_year(1971), "0: \"Blue\" by Joni Mitchell (1971)")]
    #[case::year_and_genre(
        Disc::new("Blue", "Joni Mitchell").with_year(1971).with_genre("Folk"),
        "0: \"Blue\" by Joni Mitchell (1971, Folk)"
    )]
    #[case::genre_and_title(
        Disc::new("Kid A", "Radiohead").with_genre("Electronic").with_title("Idioteque"),
        "0: \"Kid A\" by Radiohead (Electronic) - Idioteque"
    )]
    fn test_disc(#[case] input: Disc, #[case] expected: &str) {
        assert_str_eq!(disc(0, &input).unwrap(), expected);
    }

    #[test]
    fn test_catalogue() {
        let catalogue: Catalogue = [
            Disc::new("Blue", "Joni Mitchell").with_year(1971),
            Disc::new("Kid A", "Radiohead"),
        ]
        .into_iter()
        .collect();

        assert_str_eq!(
            super::catalogue(&catalogue).unwrap(),
            "Catalogue (2 discs): [\n\t0: \"Blue\" by Joni Mitchell (1971),\n\t1: \"Kid A\" by Radiohead,\n]\n"
        );
    }

    #[test]
    fn test_empty_catalogue() {
        assert_str_eq!(
            super::catalogue(&Catalogue::new()).unwrap(),
            "Catalogue (0 discs): [\n]\n"
        );
        assert_str_eq!(count(&Catalogue::new()).unwrap(), "0 disc(s), capacity 4");
    }
}
