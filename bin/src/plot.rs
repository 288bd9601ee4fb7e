use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use wordle_freq_core::structs::{LetterCounts, PositionalFrequencies, ALPHABET};

/// (letter, count) pairs in alphabet order, ready for a bar chart.
pub fn bar_series(counts: &LetterCounts) -> Vec<(char, u64)> {
    counts.iter().collect()
}

/// (position, letter index, frequency) cells in row order.
pub fn heatmap_cells<const N: usize>(
    frequencies: &PositionalFrequencies<N>,
) -> Vec<(usize, usize, f64)> {
    frequencies
        .0
        .iter()
        .enumerate()
        .flat_map(|(position, row)| {
            row.iter()
                .enumerate()
                .map(move |(letter, &frequency)| (position, letter, frequency))
        })
        .collect()
}

pub fn draw_letter_bar<DB>(
    root: &DrawingArea<DB, Shift>,
    caption: &str,
    counts: &LetterCounts,
    color: &RGBColor,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let series = bar_series(counts);
    let y_max = (series.iter().map(|&(_, count)| count).max().unwrap_or(0) + 1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 24u32))
        .x_label_area_size(35u32)
        .y_label_area_size(60u32)
        .margin(8u32)
        .build_cartesian_2d((0..ALPHABET.len()).into_segmented(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(&WHITE.mix(0.3))
        .x_labels(ALPHABET.len())
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(index) | SegmentValue::Exact(index)
                if *index < ALPHABET.len() =>
            {
                ALPHABET[*index].to_string()
            }
            _ => String::new(),
        })
        .y_desc("count")
        .x_desc("letter")
        .axis_desc_style(("sans-serif", 15u32))
        .draw()?;

    chart.draw_series(series.iter().enumerate().map(|(x, &(_, count))| {
        let x0 = SegmentValue::Exact(x);
        let x1 = SegmentValue::Exact(x + 1);
        Rectangle::new([(x0, 0.), (x1, count as f64)], color.filled())
    }))?;

    Ok(())
}

pub fn draw_positional_heatmap<DB, const N: usize>(
    root: &DrawingArea<DB, Shift>,
    caption: &str,
    frequencies: &PositionalFrequencies<N>,
    color: &RGBColor,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let cells = heatmap_cells(frequencies);
    let max = cells
        .iter()
        .map(|&(_, _, frequency)| frequency)
        .fold(0., f64::max);

    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 24u32))
        .x_label_area_size(35u32)
        .y_label_area_size(60u32)
        .margin(8u32)
        .build_cartesian_2d(0..N as i32, 0..ALPHABET.len() as i32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(N)
        .y_labels(ALPHABET.len())
        .x_label_formatter(&|x| (x + 1).to_string())
        .y_label_formatter(&|y| {
            ALPHABET
                .get(*y as usize)
                .map(|c| c.to_string())
                .unwrap_or_default()
        })
        .x_desc("position")
        .y_desc("letter")
        .axis_desc_style(("sans-serif", 15u32))
        .draw()?;

    chart.draw_series(cells.iter().map(|&(position, letter, frequency)| {
        let intensity = if max > 0. { frequency / max } else { 0. };
        Rectangle::new(
            [
                (position as i32, letter as i32),
                (position as i32 + 1, letter as i32 + 1),
            ],
            color.mix(intensity).filled(),
        )
    }))?;

    Ok(())
}
