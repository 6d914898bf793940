mod auxiliary_flows;
mod bid_lifecycle;
mod fetching;
mod pagination;
mod search_and_sort;
