mod assumptions;
mod business_case;
mod choice;
mod field;
mod mentorship_template;
mod selection;

pub use assumptions::{
    AssumptionOverrides, AssumptionsError, RoiAssumptions, max_avg_salary,
    max_replacement_cost_multiplier, max_total_revenue,
};
pub use business_case::{
    AudienceSize, BusinessCaseSelection, EmployeeSize, MatchingApproach, MeasurementFocus,
    PrimaryGoal, ProgramType, Timeline,
};
pub use choice::{Choice, OptionSet};
pub use field::{Answer, FieldId, FieldKind, OptionInfo, Question, TrackedField};
pub use mentorship_template::{
    EmployeePopulation, MatchingProcess, MentoringStyle, ProgramFormat, ProgramGoal,
    TemplateSelection,
};
pub use selection::{GuideKind, Selection, UnknownGuide};
