mod export_tools_tests;
mod follow_up_contact_tests;
mod market_outreach_tests;
mod vehicle_flow_tests;
