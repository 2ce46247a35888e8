//! Terminal, Markdown and JSON output.

use anyhow::Result;
use chrono::Local;
use ghpulse_core::analytics::{
    weekday_name, AchievementResponse, CategoryFilter, InsightResult, SortKey,
};
use ghpulse_core::config::DashboardConfig;
use ghpulse_core::format::{format_count, format_date, format_percent, format_timestamp, or_na};
use ghpulse_core::{Dashboard, LanguageStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Terminal,
    Markdown,
    Json,
}

const RULE_WIDTH: usize = 60;

fn header(title: &str) {
    println!();
    println!("╭{}╮", "─".repeat(RULE_WIDTH));
    println!("│{:^width$}│", title, width = RULE_WIDTH);
    println!("╰{}╯", "─".repeat(RULE_WIDTH));
    println!();
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn streak_range(insights: &InsightResult) -> String {
    match (insights.longest_streak_start, insights.longest_streak_end) {
        (Some(start), Some(end)) => {
            format!(" ({} - {})", start.format("%b %d"), end.format("%b %d"))
        }
        _ => String::new(),
    }
}

// ============================================
// Insights
// ============================================

pub fn insights(insights: &InsightResult, format: Format) -> Result<()> {
    match format {
        Format::Terminal => {
            header("CONTRIBUTION INSIGHTS");
            print_insights_terminal(insights);
        }
        Format::Markdown => {
            println!("# Contribution Insights");
            println!();
            print_insights_markdown(insights);
            footer();
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(insights)?),
    }
    Ok(())
}

fn print_insights_terminal(insights: &InsightResult) {
    if insights.is_insufficient() {
        println!("  Not enough contribution data.");
        println!();
        return;
    }

    println!("🔥 STREAKS");
    println!(
        "   Longest:  {} day{}{}",
        insights.longest_streak,
        plural(insights.longest_streak),
        streak_range(insights)
    );
    println!(
        "   Current:  {} day{}",
        insights.current_streak,
        plural(insights.current_streak)
    );
    println!();

    println!("📊 ACTIVITY");
    println!(
        "   Total:        {} contributions",
        format_count(insights.total_contributions)
    );
    println!(
        "   Active days:  {} of {} ({} consistency)",
        insights.active_days,
        insights.total_days,
        format_percent(insights.consistency)
    );
    println!("   Per active day: {:.1}", insights.avg_per_active_day);
    println!();

    println!("⏰ PATTERNS");
    println!("   Busiest day:     {}", insights.busiest_day_display());
    println!("   Busiest month:   {}", insights.busiest_month_display());
    println!("   Busiest weekday: {}", insights.busiest_weekday_display());
    println!();

    let max = insights.weekday_totals.iter().copied().max().unwrap_or(0);
    for (day, &count) in insights.weekday_totals.iter().enumerate() {
        let width = if max == 0 {
            0
        } else {
            (count as f64 / max as f64 * 30.0).round() as usize
        };
        println!(
            "   {:<9} {:<30} {}",
            weekday_name(day as u8),
            "█".repeat(width),
            count
        );
    }
    println!();

    if insights.skipped_records > 0 {
        println!(
            "   ({} malformed record{} skipped)",
            insights.skipped_records,
            plural(insights.skipped_records)
        );
        println!();
    }
}

fn print_insights_markdown(insights: &InsightResult) {
    println!("## Contributions");
    println!();
    if insights.is_insufficient() {
        println!("*Not enough contribution data.*");
        println!();
        return;
    }

    println!("| Metric | Value |");
    println!("|--------|-------|");
    println!("| Total contributions | {} |", insights.total_contributions);
    println!(
        "| Longest streak | {} day{}{} |",
        insights.longest_streak,
        plural(insights.longest_streak),
        streak_range(insights)
    );
    println!("| Current streak | {} |", insights.current_streak);
    println!(
        "| Active days | {} of {} |",
        insights.active_days, insights.total_days
    );
    println!("| Consistency | {} |", format_percent(insights.consistency));
    println!(
        "| Avg per active day | {:.1} |",
        insights.avg_per_active_day
    );
    println!("| Busiest day | {} |", insights.busiest_day_display());
    println!("| Busiest month | {} |", insights.busiest_month_display());
    println!("| Busiest weekday | {} |", insights.busiest_weekday_display());
    println!();
}

fn footer() {
    println!("---");
    println!(
        "*Generated by ghpulse on {}*",
        format_date(Local::now().date_naive())
    );
}

// ============================================
// Dashboard
// ============================================

pub fn dashboard(dashboard: &Dashboard, config: &DashboardConfig, format: Format) -> Result<()> {
    match format {
        Format::Terminal => print_dashboard_terminal(dashboard, config),
        Format::Markdown => print_dashboard_markdown(dashboard, config),
        Format::Json => println!("{}", serde_json::to_string_pretty(dashboard)?),
    }
    Ok(())
}

fn print_dashboard_terminal(dashboard: &Dashboard, config: &DashboardConfig) {
    let user = &dashboard.user;
    header(&format!("{} (@{})", user.display_name(), user.login));

    println!("   {}", user.bio_display());
    println!(
        "   Followers: {}   Following: {}",
        format_count(user.followers),
        format_count(user.following)
    );
    println!("   Joined GitHub on: {}", user.joined_display());
    println!();

    if let Some(persona) = &dashboard.persona {
        println!("🎭 PERSONA: {} {}", persona.persona.emoji(), persona.persona.name());
        println!("   \"{}\"", persona.persona.tagline());
        for t in persona.top_traits(3) {
            println!("   - {:<16} {:.2}", t.name, t.score);
        }
        println!();
    }

    if !dashboard.languages.is_empty() {
        println!("🗣  LANGUAGE USAGE");
        for (language, count) in dashboard
            .languages
            .ranked()
            .into_iter()
            .take(config.top_languages)
        {
            println!("   {:<16} ({})", language, LanguageStats::repo_label(count));
        }
        println!();
    }

    if !dashboard.repos.is_empty() {
        println!("📁 REPOSITORIES ({})", dashboard.repos.len());
        for repo in &dashboard.repos {
            println!(
                "   {:<28} ★ {:<6} ⑂ {:<6} {}",
                repo.name,
                repo.stargazers_count,
                repo.forks_count,
                or_na(repo.language.as_deref())
            );
        }
        println!();
    }

    match &dashboard.insights {
        Some(insights) => print_insights_terminal(insights),
        None => {
            println!("  Contribution data unavailable.");
            println!();
        }
    }

    if let Some(achievements) = &dashboard.achievements {
        println!(
            "🏆 ACHIEVEMENTS: {}/{} unlocked ({})",
            achievements.stats.unlocked_achievements,
            achievements.stats.total_achievements,
            format_percent(achievements.stats.completion_percent())
        );
        for goal in achievements.next_goals(config.next_goals) {
            println!(
                "   Next: {} {} ({})",
                goal.icon,
                goal.name,
                format_percent(goal.percentage)
            );
        }
        println!();
    }

    for warning in &dashboard.warnings {
        println!("⚠  {}", warning);
    }
}

fn print_dashboard_markdown(dashboard: &Dashboard, config: &DashboardConfig) {
    let user = &dashboard.user;
    println!("# {} (@{})", user.display_name(), user.login);
    println!();
    println!("> {}", user.bio_display());
    println!();
    println!(
        "- **Followers:** {}\n- **Following:** {}\n- **Joined:** {}",
        user.followers,
        user.following,
        user.joined_display()
    );
    println!();

    if let Some(persona) = &dashboard.persona {
        println!("## Developer Persona");
        println!();
        println!("{} **{}**", persona.persona.emoji(), persona.persona.name());
        println!();
        println!("*\"{}\"*", persona.persona.tagline());
        println!();
    }

    if !dashboard.languages.is_empty() {
        println!("## Language Usage");
        println!();
        for (language, count) in dashboard
            .languages
            .ranked()
            .into_iter()
            .take(config.top_languages)
        {
            println!("- **{}** ({})", language, LanguageStats::repo_label(count));
        }
        println!();
    }

    if !dashboard.repos.is_empty() {
        println!("## Repositories ({})", dashboard.repos.len());
        println!();
        println!("| Name | Language | Stars | Forks |");
        println!("|------|----------|-------|-------|");
        for repo in &dashboard.repos {
            println!(
                "| [{}]({}) | {} | {} | {} |",
                repo.name,
                repo.html_url,
                or_na(repo.language.as_deref()),
                repo.stargazers_count,
                repo.forks_count
            );
        }
        println!();
    }

    match &dashboard.insights {
        Some(insights) => print_insights_markdown(insights),
        None => {
            println!("## Contributions");
            println!();
            println!("*Contribution data unavailable.*");
            println!();
        }
    }

    if let Some(achievements) = &dashboard.achievements {
        print_achievements_markdown(
            achievements,
            CategoryFilter::All,
            SortKey::Progress,
            config.next_goals,
        );
    }

    if !dashboard.warnings.is_empty() {
        println!("## Warnings");
        println!();
        for warning in &dashboard.warnings {
            println!("- {}", warning);
        }
        println!();
    }

    footer();
}

// ============================================
// Achievements
// ============================================

pub fn achievements(
    data: &AchievementResponse,
    filter: CategoryFilter,
    sort: SortKey,
    next_goals: usize,
    username: &str,
    format: Format,
) -> Result<()> {
    match format {
        Format::Terminal => {
            header(&format!("ACHIEVEMENTS FOR @{}", username));
            print_achievements_terminal(data, filter, sort, next_goals);
        }
        Format::Markdown => {
            println!("# Achievements for @{}", username);
            println!();
            print_achievements_markdown(data, filter, sort, next_goals);
            footer();
        }
        Format::Json => {
            let selected = data.select(filter, sort);
            let json = serde_json::json!({
                "stats": data.stats,
                "categories": data.category_summaries(),
                "achievements": selected,
                "nextGoals": data.next_goals(next_goals),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn print_achievements_terminal(
    data: &AchievementResponse,
    filter: CategoryFilter,
    sort: SortKey,
    next_goals: usize,
) {
    let stats = &data.stats;
    println!(
        "   Unlocked: {}/{} ({} complete)   Overall progress: {}",
        stats.unlocked_achievements,
        stats.total_achievements,
        format_percent(stats.completion_percent()),
        format_percent(stats.overall_progress)
    );
    if !stats.most_recent_achievement.is_empty() {
        println!("   Recent unlock: {}", stats.most_recent_achievement);
    }
    println!();

    for summary in data.category_summaries() {
        println!(
            "   {} {:<16} {}/{} unlocked ({})",
            summary.category.emoji(),
            summary.category.label(),
            summary.unlocked,
            summary.total,
            format_percent(summary.progress)
        );
    }
    println!();

    let selected = data.select(filter, sort);
    if selected.is_empty() {
        println!("  No achievements found.");
        println!();
        return;
    }

    for a in selected {
        let status = if a.unlocked { "✔" } else { " " };
        println!(
            "{} {} {:<28} {:<8} {:>6}  {}/{}",
            status,
            a.icon,
            a.name,
            a.rarity.as_str(),
            format_percent(a.percentage),
            a.current_progress,
            a.target_progress
        );
        println!("      {}", a.description);
        if let Some(date) = a.unlocked_date.as_deref().filter(|_| a.unlocked) {
            println!("      Unlocked: {}", format_timestamp(date));
        }
    }
    println!();

    let goals = data.next_goals(next_goals);
    if !goals.is_empty() {
        println!("🎯 NEXT GOALS");
        for goal in goals {
            println!(
                "   {} {} - {}/{} ({})",
                goal.icon,
                goal.name,
                goal.current_progress,
                goal.target_progress,
                format_percent(goal.percentage)
            );
        }
        println!();
    }
}

fn print_achievements_markdown(
    data: &AchievementResponse,
    filter: CategoryFilter,
    sort: SortKey,
    next_goals: usize,
) {
    println!("## Achievements");
    println!();
    println!(
        "**{}/{}** unlocked ({} complete)",
        data.stats.unlocked_achievements,
        data.stats.total_achievements,
        format_percent(data.stats.completion_percent())
    );
    println!();

    let selected = data.select(filter, sort);
    if selected.is_empty() {
        println!("*No achievements found.*");
        println!();
        return;
    }

    println!("| | Name | Category | Rarity | Progress |");
    println!("|-|------|----------|--------|----------|");
    for a in selected {
        println!(
            "| {} | {} | {} | {} | {} |",
            a.icon,
            a.name,
            a.category.label(),
            a.rarity,
            format_percent(a.percentage)
        );
    }
    println!();

    let goals = data.next_goals(next_goals);
    if !goals.is_empty() {
        println!("### Next Goals");
        println!();
        for goal in goals {
            println!(
                "- {} **{}** - {}/{} ({})",
                goal.icon,
                goal.name,
                goal.current_progress,
                goal.target_progress,
                format_percent(goal.percentage)
            );
        }
        println!();
    }
}
