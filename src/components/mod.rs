pub mod control_panel;
pub mod force_graph;
pub mod info_popup;
