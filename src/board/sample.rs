use super::entry::{Board, Category, Entry};

/// Built-in board so the binary runs without a dataset file.
pub fn sample_board() -> Board {
    let rows: &[(&str, &str, Category, &str, &str, i32, u32)] = &[
        (
            "sample-01",
            "Welcome to the board. Click a star to read the story behind it.",
            Category::Moment,
            "the board",
            "starboard",
            2024,
            1,
        ),
        (
            "sample-02",
            "The first end-to-end model shipped to a customer fleet. Nobody slept that week.",
            Category::Moment,
            "jamie",
            "orion motors",
            2023,
            18,
        ),
        (
            "sample-03",
            "Ten years from now the steering wheel will be an optional extra.",
            Category::Prophecy,
            "morgan",
            "orion motors",
            2030,
            42,
        ),
        (
            "sample-04",
            "We still call the simulation rig 'the aquarium'. Nobody remembers why.",
            Category::Culture,
            "sam",
            "vega autonomy",
            2019,
            7,
        ),
        (
            "sample-05",
            "Stood on the test track when the prototype took its first unprotected left.",
            Category::Onsite,
            "alex",
            "vega autonomy",
            2021,
            25,
        ),
        (
            "sample-06",
            "Realized in the shower that the planner bug was a coordinate frame mixup.",
            Category::Inspiration,
            "rin",
            "lyra labs",
            2022,
            11,
        ),
        (
            "sample-07",
            "The 2016 demo video that started the whole funding wave.",
            Category::History,
            "observer",
            "lyra labs",
            2016,
            33,
        ),
        (
            "sample-08",
            "The recall announcement. Three years of work parked overnight.",
            Category::DarkMoment,
            "anonymous",
            "orion motors",
            2020,
            56,
        ),
        (
            "sample-09",
            "Regulator workshop notes: everyone agrees on safety, nobody on metrics.",
            Category::Onsite,
            "casey",
            "polaris systems",
            2024,
            4,
        ),
        (
            "sample-10",
            "By 2035 the depot will dispatch more software updates than vehicles.",
            Category::Prophecy,
            "morgan",
            "polaris systems",
            2035,
            9,
        ),
        (
            "sample-11",
            "Whiteboard motto from the old office: measure twice, merge once.",
            Category::Culture,
            "sam",
            "lyra labs",
            2018,
            14,
        ),
        (
            "sample-12",
            "First rain-soaked night drive with zero interventions.",
            Category::Moment,
            "alex",
            "vega autonomy",
            2026,
            61,
        ),
    ];

    Board::new(
        rows.iter()
            .map(|&(id, text, category, author, company, year, engagement)| Entry {
                id: id.to_owned(),
                text: text.to_owned(),
                category,
                author: author.to_owned(),
                company: company.to_owned(),
                year,
                engagement,
            })
            .collect(),
    )
}
