//! UI Components
//!
//! Dashboard panels and the small widgets they share.

mod assistant_panel;
mod copy_logs_button;
mod delete_confirm_button;
mod header_bar;
mod kanban_board;
mod kpi_card;
mod lead_list;
mod new_lead_form;
mod new_task_form;
mod property_map;
mod voice_list;
mod voice_recorder;

pub use assistant_panel::AssistantPanel;
pub use copy_logs_button::CopyLogsButton;
pub use delete_confirm_button::DeleteConfirmButton;
pub use header_bar::HeaderBar;
pub use kanban_board::KanbanBoard;
pub use kpi_card::KpiCard;
pub use lead_list::LeadList;
pub use new_lead_form::NewLeadForm;
pub use new_task_form::NewTaskForm;
pub use property_map::PropertyMap;
pub use voice_list::VoiceList;
pub use voice_recorder::VoiceRecorder;
