//! Content blocks, one per section
//!
//! Every block staggers its children in with the shared container policy.
//! Blocks are remounted when the active section changes, which restarts the
//! entrance sequence.

use leptos::prelude::*;

use crate::core::Section;
use crate::core::content::{
    CERTIFICATIONS, Certification, EDUCATION, EducationEntry, PROFILE, PROJECTS, Project,
    SKILL_GROUPS, SkillGroup,
};
use crate::core::motion::{self, MotionPreference};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{stagger_style, use_motion_context};

fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Intro => icons::TERMINAL,
        Section::Education => icons::DATABASE,
        Section::Projects => icons::CODE,
        Section::Skills => icons::KEY,
    }
}

/// Content block for `section`
#[component]
pub fn ContentBlock(section: Section) -> impl IntoView {
    let body = match section {
        Section::Intro => view! { <IntroBody /> }.into_any(),
        Section::Education => view! { <EducationBody /> }.into_any(),
        Section::Projects => view! { <ProjectsBody /> }.into_any(),
        Section::Skills => view! { <SkillsBody /> }.into_any(),
    };

    view! {
        <section class="space-y-6" data-content=section.id()>
            <div class="flex items-center gap-4 mb-8">
                <Icon name=section_icon(section) class="w-8 h-8 text-cyber-neon" />
                <h2 class="text-2xl font-bold text-gradient">{section.heading()}</h2>
            </div>
            {body}
        </section>
    }
}

#[component]
fn IntroBody() -> impl IntoView {
    view! {
        <div class="font-mono leading-relaxed space-y-2">
            {PROFILE
                .intro
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    view! {
                        <p class="motion" style=stagger_style(motion::CONTAINER, motion::ITEM, i)>
                            <span class="text-cyber-neon">"> "</span>
                            {*line}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn EducationBody() -> impl IntoView {
    view! {
        <div class="space-y-4">
            {EDUCATION
                .iter()
                .enumerate()
                .map(|(i, entry)| view! { <EducationCard entry=*entry index=i /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn EducationCard(entry: EducationEntry, index: usize) -> impl IntoView {
    view! {
        <div class="glass-panel p-4 motion" style=stagger_style(motion::CONTAINER, motion::ITEM, index)>
            <h3 class="text-lg font-bold text-cyber-purple">{entry.institution}</h3>
            <p class="text-sm text-gray-400">{entry.degree}" • "{entry.period}</p>
            <ul class="mt-2 text-sm list-disc list-inside">
                {entry.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ProjectsBody() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {PROJECTS
                .iter()
                .enumerate()
                .map(|(i, project)| view! { <ProjectCard project=*project index=i /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <div
            class="glass-panel p-6 hover:neon-border transition-all duration-300 motion"
            style=stagger_style(motion::CONTAINER, motion::ITEM, index)
        >
            <div class="flex items-start justify-between gap-2 mb-2">
                <h3 class="text-lg font-bold text-cyber-purple">{project.title}</h3>
                <span class="text-xs text-gray-500 font-mono">{project.period}</span>
            </div>
            <p class="text-sm text-gray-400 mb-4">{project.description}</p>
            <div class="flex flex-wrap gap-2">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="px-2 py-1 text-xs glass-panel text-cyber-neon">{*tag}</span> })
                    .collect_view()}
            </div>
            {project.repository.map(|href| view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-1 mt-4 text-xs text-cyber-accent hover:text-cyber-neon"
                >
                    <Icon name=icons::EXTERNAL_LINK class="w-3 h-3" />
                    "Source"
                </a>
            })}
        </div>
    }
}

#[component]
fn SkillsBody() -> impl IntoView {
    view! {
        <div class="space-y-8">
            {SKILL_GROUPS
                .iter()
                .enumerate()
                .map(|(i, group)| view! { <SkillGroupPanel group=*group index=i /> })
                .collect_view()}
            <Certifications offset=SKILL_GROUPS.len() />
        </div>
    }
}

#[component]
fn SkillGroupPanel(group: SkillGroup, index: usize) -> impl IntoView {
    view! {
        <div class="motion" style=stagger_style(motion::CONTAINER, motion::ITEM, index)>
            <h3 class="text-sm uppercase tracking-wider text-cyber-accent mb-3">{group.category}</h3>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {group.skills.iter().map(|skill| view! { <SkillChip skill=*skill /> }).collect_view()}
            </div>
        </div>
    }
}

/// Skill tag with the hover pulse; purely cosmetic
#[component]
fn SkillChip(skill: &'static str) -> impl IntoView {
    let preference = use_motion_context().preference;
    let hover_class = move || {
        if preference.get() == MotionPreference::Reduced {
            "glass-panel p-4 text-center"
        } else {
            "glass-panel p-4 text-center skill-chip"
        }
    };

    view! {
        <div class=hover_class style=move || motion::SKILL_CHIP_HOVER.style(preference.get())>
            <span class="text-cyber-neon">{skill}</span>
        </div>
    }
}

#[component]
fn Certifications(
    /// Stagger position of the first certification
    offset: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h3 class="text-sm uppercase tracking-wider text-cyber-accent">"Certifications"</h3>
            {CERTIFICATIONS
                .iter()
                .enumerate()
                .map(|(i, cert)| view! { <CertificationRow cert=*cert index=offset + i /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn CertificationRow(cert: Certification, index: usize) -> impl IntoView {
    view! {
        <div
            class="glass-panel p-4 flex items-center gap-4 motion"
            style=stagger_style(motion::CONTAINER, motion::ITEM, index)
        >
            <Icon name=icons::AWARD class="w-6 h-6 text-cyber-purple" />
            <div>
                <p class="font-bold">{cert.title}</p>
                <p class="text-xs text-gray-400">{cert.issuer}" • "{cert.year}</p>
            </div>
        </div>
    }
}
