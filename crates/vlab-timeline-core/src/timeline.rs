//! The Virtual Lab LMS rollout timeline (August - November 2024)

use chrono::NaiveDate;

use crate::TimelineRecord;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid timeline date")
}

/// Activities of the TaRL assessment system rollout, in schedule order
pub fn virtual_lab_timeline() -> Vec<TimelineRecord> {
    vec![
        // August 2024
        TimelineRecord::new("System Setup & Deployment", date(8, 1), date(8, 14))
            .week("Week 1-2")
            .description(
                "Deploy Virtual Lab LMS to production, configure database with TaRL tables, \
                 set up 65 teacher accounts across 32 schools",
            )
            .deliverables("Production system deployed, user accounts created, permissions configured")
            .engineers(3)
            .person_days(30)
            .responsible("Technical Team"),
        TimelineRecord::new("Database Configuration", date(8, 1), date(8, 14))
            .week("Week 1-2")
            .description(
                "Configure school access permissions, subject assignments, \
                 integrate with existing TaRL tables",
            )
            .deliverables("Database fully configured with access controls")
            .engineers(2)
            .person_days(20)
            .responsible("Database Team"),
        TimelineRecord::new("Teacher Training & Onboarding", date(8, 15), date(8, 31))
            .week("Week 3-4")
            .description(
                "Conduct training for 65 teachers on system usage, bilingual interface, \
                 student selection, assessment entry",
            )
            .deliverables("All teachers trained, user guides created, practice sessions completed")
            .engineers(2)
            .person_days(20)
            .responsible("Training Team + Tech Support"),
        TimelineRecord::new("Documentation & Support Materials", date(8, 15), date(8, 31))
            .week("Week 3-4")
            .description("Create user guides in Khmer and English, video tutorials, FAQ documents")
            .deliverables("Complete documentation package in both languages")
            .engineers(1)
            .person_days(10)
            .responsible("Documentation Team"),
        // September 2024
        TimelineRecord::new("Student Selection Phase", date(9, 2), date(9, 6))
            .week("Week 1")
            .description(
                "Teachers select 20 students per school using drag-and-drop interface, \
                 total 640 students",
            )
            .deliverables("All TaRL students selected and registered in system")
            .engineers(1)
            .person_days(5)
            .responsible("Tech Support"),
        TimelineRecord::new("Baseline Assessment Execution", date(9, 9), date(9, 20))
            .week("Week 2-3")
            .description(
                "Conduct baseline assessments for Khmer and Math, data entry for all 640 students",
            )
            .deliverables("Complete baseline data for all students")
            .engineers(2)
            .person_days(20)
            .responsible("Tech Support + Data Team"),
        TimelineRecord::new("Baseline Data Analysis", date(9, 23), date(9, 27))
            .week("Week 4")
            .description("Generate reports, analyze student levels, prepare intervention strategies")
            .deliverables("Baseline reports, student level analysis, intervention plans")
            .engineers(2)
            .person_days(10)
            .responsible("Data Analysis Team"),
        // October 2024
        TimelineRecord::new("TaRL Teaching Support", date(10, 1), date(10, 11))
            .week("Week 1-2")
            .description(
                "Technical support for teachers implementing TaRL methodology, system monitoring",
            )
            .deliverables("Continuous system support, usage reports")
            .engineers(1)
            .person_days(10)
            .responsible("Tech Support"),
        TimelineRecord::new("Midline Assessment Implementation", date(10, 14), date(10, 25))
            .week("Week 3-4")
            .description(
                "Support midline assessments, ensure data quality, generate progress reports",
            )
            .deliverables("Complete midline data, progress tracking reports")
            .engineers(2)
            .person_days(20)
            .responsible("Tech Support + Data Team"),
        TimelineRecord::new("Mid-Program Analysis", date(10, 28), date(10, 31))
            .week("Week 5")
            .description(
                "Analyze baseline vs midline data, generate comparison reports, identify trends",
            )
            .deliverables("Comparative analysis reports, improvement metrics")
            .engineers(2)
            .person_days(8)
            .responsible("Data Analysis Team"),
        // November 2024
        TimelineRecord::new("Endline Assessment Support", date(11, 4), date(11, 15))
            .week("Week 1-2")
            .description(
                "Final assessment round support, ensure complete data collection for all cycles",
            )
            .deliverables("Complete endline data for all students")
            .engineers(2)
            .person_days(20)
            .responsible("Tech Support + Data Team"),
        TimelineRecord::new("Comprehensive Reporting", date(11, 18), date(11, 22))
            .week("Week 3")
            .description(
                "Generate final reports showing full progression cycle, \
                 create data exports for provincial office",
            )
            .deliverables("Complete impact reports, data exports, analytics dashboard")
            .engineers(3)
            .person_days(15)
            .responsible("Data Analysis + Reporting Team"),
        TimelineRecord::new("Program Evaluation & Planning", date(11, 25), date(11, 29))
            .week("Week 4")
            .description(
                "Evaluate system performance, collect feedback, plan improvements for next cycle",
            )
            .deliverables("Evaluation report, improvement recommendations, next cycle plan")
            .engineers(2)
            .person_days(10)
            .responsible("Project Management Team"),
    ]
}
