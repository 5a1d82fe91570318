//! The six page sections and the footer.

use bevy::prelude::*;

use super::widgets::{
    button, card_node, chip_row, fill, section_header, text, BODY_SIZE, SMALL_SIZE,
};
use crate::content::{
    self, CONTACTS, EDUCATION, EMAIL_HREF, EXPERIENCE, GITHUB_URL, LINKEDIN_URL, PROFILE, SKILLS,
};
use crate::links::ExternalLink;
use crate::modal::ProjectCard;
use crate::navigation::{NavButton, Section, SectionAnchor};
use crate::theme::{Palette, Themed};

/// Root node of a section, tagged for the tracker.
fn section_root(section: Section) -> (SectionAnchor, Node) {
    (
        SectionAnchor(section),
        Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            flex_shrink: 0.0,
            padding: UiRect::axes(Val::Px(24.0), Val::Px(80.0)),
            min_height: if section == Section::Home {
                Val::Vh(90.0)
            } else {
                Val::Auto
            },
            ..default()
        },
    )
}

/// Centered column holding a section's content.
fn container() -> Node {
    Node {
        width: Val::Percent(100.0),
        max_width: Val::Px(1100.0),
        flex_direction: FlexDirection::Column,
        ..default()
    }
}

/// A rounded card on the themed surface color.
fn surface_card(width: Val, palette: &Palette) -> impl Bundle {
    (
        card_node(width),
        fill(Themed::Surface, palette),
        BorderRadius::all(Val::Px(12.0)),
    )
}

fn wrap_row(gap: f32) -> Node {
    Node {
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::Wrap,
        column_gap: Val::Px(gap),
        row_gap: Val::Px(gap),
        justify_content: JustifyContent::Center,
        ..default()
    }
}

pub fn spawn_sections(page: &mut ChildBuilder, palette: &Palette) {
    home(page, palette);
    about(page, palette);
    experience(page, palette);
    projects(page, palette);
    education(page, palette);
    contact(page, palette);
    footer(page, palette);
}

fn home(page: &mut ChildBuilder, palette: &Palette) {
    page.spawn(section_root(Section::Home)).with_children(|section| {
        section
            .spawn(Node {
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                margin: UiRect::top(Val::Px(60.0)),
                column_gap: Val::Px(48.0),
                ..container()
            })
            .with_children(|hero| {
                hero.spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(16.0),
                    flex_grow: 1.0,
                    flex_basis: Val::Px(0.0),
                    ..default()
                })
                .with_children(|copy| {
                    text(copy, PROFILE.name, 56.0, Themed::Heading, palette);
                    text(copy, PROFILE.headline, 28.0, Themed::Accent, palette);
                    text(copy, PROFILE.tagline, 18.0, Themed::Body, palette);
                    copy.spawn(Node {
                        column_gap: Val::Px(16.0),
                        margin: UiRect::top(Val::Px(16.0)),
                        ..default()
                    })
                    .with_children(|buttons| {
                        button(buttons, "Contact Me", NavButton(Section::Contact), true, palette);
                        button(
                            buttons,
                            "View Projects",
                            NavButton(Section::Projects),
                            false,
                            palette,
                        );
                    });
                });

                hero.spawn((
                    Node {
                        width: Val::Px(220.0),
                        height: Val::Px(220.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        flex_shrink: 0.0,
                        ..default()
                    },
                    fill(Themed::AccentFill, palette),
                    BorderRadius::MAX,
                ))
                .with_children(|avatar| {
                    text(avatar, PROFILE.initials, 72.0, Themed::OnAccent, palette);
                });
            });
    });
}

fn about(page: &mut ChildBuilder, palette: &Palette) {
    page.spawn(section_root(Section::About)).with_children(|section| {
        section.spawn(container()).with_children(|body| {
            section_header(body, "About Me", palette);
            body.spawn(Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(16.0),
                margin: UiRect::bottom(Val::Px(40.0)),
                ..default()
            })
            .with_children(|paragraphs| {
                for paragraph in PROFILE.about {
                    text(paragraphs, *paragraph, 18.0, Themed::Body, palette);
                }
            });

            text(body, "Technical Skills", 24.0, Themed::Heading, palette);
            body.spawn(Node {
                margin: UiRect::top(Val::Px(16.0)),
                ..wrap_row(20.0)
            })
            .with_children(|grid| {
                for category in SKILLS {
                    grid.spawn(surface_card(Val::Px(320.0), palette))
                        .with_children(|card| {
                            text(card, category.title, 18.0, Themed::Heading, palette);
                            chip_row(card, category.skills.iter().copied(), palette);
                        });
                }
            });
        });
    });
}

fn experience(page: &mut ChildBuilder, palette: &Palette) {
    page.spawn(section_root(Section::Experience)).with_children(|section| {
        section.spawn(container()).with_children(|body| {
            section_header(body, "Work Experience", palette);
            body.spawn(Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(24.0),
                border: UiRect::left(Val::Px(3.0)),
                padding: UiRect::left(Val::Px(24.0)),
                ..default()
            })
            .insert(BorderColor(palette.accent))
            .with_children(|timeline| {
                for job in EXPERIENCE {
                    timeline
                        .spawn(surface_card(Val::Percent(100.0), palette))
                        .with_children(|card| {
                            card.spawn(Node {
                                justify_content: JustifyContent::SpaceBetween,
                                flex_wrap: FlexWrap::Wrap,
                                ..default()
                            })
                            .with_children(|header| {
                                header
                                    .spawn(Node {
                                        flex_direction: FlexDirection::Column,
                                        ..default()
                                    })
                                    .with_children(|company| {
                                        text(company, job.company, 22.0, Themed::Heading, palette);
                                        text(
                                            company,
                                            job.location,
                                            SMALL_SIZE,
                                            Themed::Body,
                                            palette,
                                        );
                                    });
                                header
                                    .spawn(Node {
                                        flex_direction: FlexDirection::Column,
                                        align_items: AlignItems::FlexEnd,
                                        ..default()
                                    })
                                    .with_children(|role| {
                                        text(role, job.title, 18.0, Themed::Accent, palette);
                                        text(role, job.period, SMALL_SIZE, Themed::Body, palette);
                                    });
                            });
                            for highlight in job.highlights {
                                text(
                                    card,
                                    format!("\u{203a} {highlight}"),
                                    BODY_SIZE,
                                    Themed::Body,
                                    palette,
                                );
                            }
                        });
                }
            });
        });
    });
}

fn projects(page: &mut ChildBuilder, palette: &Palette) {
    page.spawn(section_root(Section::Projects)).with_children(|section| {
        section.spawn(container()).with_children(|body| {
            section_header(body, "Projects", palette);
            body.spawn(wrap_row(24.0)).with_children(|grid| {
                for project in content::projects() {
                    grid.spawn((
                        Button,
                        ProjectCard(project.id),
                        card_node(Val::Px(330.0)),
                        fill(Themed::Surface, palette),
                        BorderRadius::all(Val::Px(12.0)),
                    ))
                    .with_children(|card| {
                        card.spawn((
                            Node {
                                height: Val::Px(150.0),
                                justify_content: JustifyContent::FlexEnd,
                                align_items: AlignItems::FlexStart,
                                padding: UiRect::all(Val::Px(8.0)),
                                ..default()
                            },
                            fill(Themed::Tag, palette),
                            BorderRadius::all(Val::Px(8.0)),
                        ))
                        .with_children(|image| {
                            if project.featured {
                                image
                                    .spawn((
                                        Node {
                                            padding: UiRect::axes(Val::Px(8.0), Val::Px(2.0)),
                                            ..default()
                                        },
                                        fill(Themed::AccentFill, palette),
                                        BorderRadius::all(Val::Px(6.0)),
                                    ))
                                    .with_children(|badge| {
                                        text(
                                            badge,
                                            "Featured",
                                            SMALL_SIZE,
                                            Themed::OnAccent,
                                            palette,
                                        );
                                    });
                            }
                        });

                        text(card, project.title, 20.0, Themed::Heading, palette);
                        text(card, project.description, SMALL_SIZE, Themed::Body, palette);

                        let (shown, more) = project.card_tags();
                        let overflow = more.map(|n| format!("+{n}"));
                        let mut labels: Vec<&str> = shown.to_vec();
                        if let Some(overflow) = &overflow {
                            labels.push(overflow);
                        }
                        chip_row(card, labels, palette);

                        card.spawn(Node {
                            column_gap: Val::Px(8.0),
                            ..default()
                        })
                        .with_children(|links| {
                            if let Some(source) = project.source {
                                button(links, "Code", ExternalLink(source), false, palette);
                            }
                            if let Some(live) = project.live {
                                button(links, "Live", ExternalLink(live), false, palette);
                            }
                        });
                        text(card, "View Details", SMALL_SIZE, Themed::Accent, palette);
                    });
                }
            });
        });
    });
}

fn education(page: &mut ChildBuilder, palette: &Palette) {
    page.spawn(section_root(Section::Education)).with_children(|section| {
        section.spawn(container()).with_children(|body| {
            section_header(body, "Education & Certifications", palette);
            body.spawn(wrap_row(24.0)).with_children(|cards| {
                for entry in EDUCATION {
                    cards
                        .spawn(surface_card(Val::Px(480.0), palette))
                        .with_children(|card| {
                            text(card, entry.institution, 22.0, Themed::Heading, palette);
                            text(card, entry.degree, 18.0, Themed::Accent, palette);
                            text(card, entry.period, SMALL_SIZE, Themed::Body, palette);
                            if let Some(certificate) = &entry.certificate {
                                card.spawn(Node::default()).with_children(|row| {
                                    button(
                                        row,
                                        certificate.label,
                                        ExternalLink(certificate.url),
                                        false,
                                        palette,
                                    );
                                });
                            }
                        });
                }
            });
        });
    });
}

fn form_field(
    parent: &mut ChildBuilder,
    label: &str,
    placeholder: &str,
    rows: u32,
    palette: &Palette,
) {
    text(parent, label, SMALL_SIZE, Themed::Heading, palette);
    parent
        .spawn((
            Node {
                width: Val::Percent(100.0),
                min_height: Val::Px(22.0 * rows as f32 + 16.0),
                padding: UiRect::all(Val::Px(8.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderColor(palette.muted.with_alpha(0.4)),
            fill(Themed::Tag, palette),
            BorderRadius::all(Val::Px(6.0)),
        ))
        .with_children(|input| {
            text(input, placeholder, SMALL_SIZE, Themed::Body, palette);
        });
}

fn contact(page: &mut ChildBuilder, palette: &Palette) {
    page.spawn(section_root(Section::Contact)).with_children(|section| {
        section.spawn(container()).with_children(|body| {
            section_header(body, "Contact Me", palette);
            body.spawn(wrap_row(32.0)).with_children(|columns| {
                columns
                    .spawn(surface_card(Val::Px(480.0), palette))
                    .with_children(|info| {
                        text(info, "Get In Touch", 24.0, Themed::Heading, palette);
                        for item in CONTACTS {
                            info.spawn(Node {
                                flex_direction: FlexDirection::Column,
                                align_items: AlignItems::FlexStart,
                                row_gap: Val::Px(4.0),
                                ..default()
                            })
                            .with_children(|row| {
                                text(row, item.label, SMALL_SIZE, Themed::Body, palette);
                                match item.href {
                                    Some(href) => {
                                        button(row, item.value, ExternalLink(href), false, palette);
                                    }
                                    None => {
                                        text(row, item.value, BODY_SIZE, Themed::Heading, palette);
                                    }
                                }
                            });
                        }
                    });

                // The form is a placeholder; messages go through the mail client.
                columns
                    .spawn(surface_card(Val::Px(480.0), palette))
                    .with_children(|form| {
                        text(form, "Send a Message", 24.0, Themed::Heading, palette);
                        form_field(form, "Name", "Your Name", 1, palette);
                        form_field(form, "Email", "your.email@example.com", 1, palette);
                        form_field(form, "Message", "Your message...", 4, palette);
                        text(
                            form,
                            "This contact form is just a demo. Please use email or phone to get in touch.",
                            SMALL_SIZE,
                            Themed::Body,
                            palette,
                        );
                        button(form, "Contact via Email", ExternalLink(EMAIL_HREF), true, palette);
                    });
            });
        });
    });
}

fn footer(page: &mut ChildBuilder, palette: &Palette) {
    page.spawn((
        Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(12.0),
            flex_shrink: 0.0,
            padding: UiRect::all(Val::Px(40.0)),
            ..default()
        },
        fill(Themed::NavBar, palette),
    ))
    .with_children(|footer| {
        text(footer, PROFILE.name, 22.0, Themed::Heading, palette);
        text(footer, PROFILE.headline, BODY_SIZE, Themed::Body, palette);
        footer
            .spawn(Node {
                column_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|social| {
                button(social, "GitHub", ExternalLink(GITHUB_URL), false, palette);
                button(social, "LinkedIn", ExternalLink(LINKEDIN_URL), false, palette);
                button(social, "Email", ExternalLink(EMAIL_HREF), false, palette);
            });
        text(
            footer,
            content::copyright_line(content::current_year()),
            SMALL_SIZE,
            Themed::Body,
            palette,
        );
    });
}
