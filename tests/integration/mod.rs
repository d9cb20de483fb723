mod dashboard_render;
mod lead_details_flow;
