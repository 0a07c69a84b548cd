/// The sprint week-pair sections of the retrospective page. This is
/// immutable seed content: the accordion renders it read-only, and it is
/// entirely outside the content update protocol. Weeks without a completed
/// write-up get a local scratch textarea instead.
pub struct WeekSection {
    pub id: &'static str,
    pub title: &'static str,
    pub retro: Option<WeekRetro>,
}

pub struct WeekRetro {
    pub went_well: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub improvements: &'static [&'static str],
    pub next_objectives: &'static [&'static str],
}

pub const WEEK_SECTIONS: &[WeekSection] = &[
    WeekSection {
        id: "week1-2",
        title: "Week 1 & Week 2",
        retro: Some(WeekRetro {
            went_well: &[
                "Successfully reached out to three potential sponsors and selected one that aligns with our project vision.",
                "Conducted a collaborative brainstorming session where all members actively contributed.",
                "Initiated usage of project management tools like Jira, helping team members upskill in agile tracking.",
                "Completed foundational deliverables including team charter, member bios, and project setup documents.",
            ],
            challenges: &[
                "Sponsor outreach began later than ideal, limiting early planning opportunities.",
                "Inconsistent meeting schedules occasionally disrupted coordination efforts.",
            ],
            improvements: &[
                "Implement a consistent meeting schedule to maintain alignment.",
                "Set clear timelines and expectations for each task.",
                "Increase transparency by making better use of shared tracking tools like Trello and Jira.",
            ],
            next_objectives: &[
                "Hold a focused sprint planning session with defined roles, deliverables, and deadlines.",
                "Enhance communication and time management to ensure all team commitments are met effectively.",
            ],
        }),
    },
    WeekSection {
        id: "week3-4",
        title: "Week 3 & Week 4",
        retro: Some(WeekRetro {
            went_well: &[
                "Acted on professor feedback from the last presentation, which clarified project direction.",
                "Strengthened client collaboration after class discussions, building stronger sponsor relations.",
                "Set clear goals and deadlines early in the sprint, which supported organized progress.",
                "Tasks were assigned efficiently, leading to reduced pressure and smoother execution.",
                "Progress tracking tools (velocity charts, info radiators) provided visual clarity on status.",
                "Communication with the sponsor led to a clearer understanding of the project scope.",
                "The team showed increased enthusiasm and productivity as momentum built.",
            ],
            challenges: &[
                "Graduation events caused delays in task execution due to divided attention.",
                "Irregular and unorganized meeting agendas led to reduced productivity.",
                "Initial uncertainty regarding platform selection and website structuring created hesitation.",
                "Handing over responsibilities to a new team member required adjustments and onboarding.",
            ],
            improvements: &[
                "Improve communication during content/document editing to maintain alignment.",
                "Establish clear agendas before meetings to keep discussions efficient and focused.",
                "Avoid lengthy meetings by having quicker check-ins or immediate async updates.",
                "Match tasks to team members' strengths through internal skill-mapping.",
            ],
            next_objectives: &[
                "Finalize the platform for client work and initiate website structure development.",
                "Maintain a consistent and clear meeting structure with documented agendas.",
                "Allocate responsibilities based on individual strengths for better task ownership.",
                "Strengthen internal alignment and avoid delays through time-efficient collaboration.",
            ],
        }),
    },
    WeekSection { id: "week5-6", title: "Week 5 & Week 6", retro: None },
    WeekSection { id: "week7-8", title: "Week 7 & Week 8", retro: None },
    WeekSection { id: "week9-10", title: "Week 9 & Week 10", retro: None },
    WeekSection { id: "week11-12", title: "Week 11 & Week 12", retro: None },
];
