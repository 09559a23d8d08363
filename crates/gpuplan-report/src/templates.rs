pub const SUMMARY: &str = r#"{{ model_name }} on {{ gpu_type }}, {{ concurrent_users }} concurrent users

GPUs needed           {{ gpus_needed }}
Server configuration  {{ server_description }}
Server cost           {{ server_cost | amount }} {{ currency }}/month
License cost          {{ license_cost | amount }} {{ currency }}/month{% if license_tier %} ({{ gpus_needed }} × {{ license_price_per_gpu | amount }}){% endif %}

TOTAL                 {{ total_cost | amount }} {{ currency }}/month

Cost per user         {{ cost_per_user | amount(decimals=2) }} {{ currency }}/month
Cost per 1M tokens    {{ cost_per_million_tokens | amount(decimals=2) }} {{ currency }}
"#;

pub const ASSUMPTIONS: &str = r#"Assumptions and calculation details

Requests
  - Average input: {{ workload.input_tokens_per_request }} tokens.
  - Average output: {{ workload.output_tokens_per_request }} tokens per request.

Performance
  - Maximum acceptable response latency: {{ workload.max_latency_seconds }} s.
  - One {{ model.gpu_type }} GPU running {{ model.display_name }} sustains {{ model.output_tokens_per_second | amount }} output tokens/s.
  - That throughput divided by the output length gives the requests one GPU completes per second.

GPU count
  - Required throughput (requests/s) = concurrent users / {{ workload.max_latency_seconds }} s.
  - GPUs = required throughput / requests per GPU, rounded up; any live traffic gets at least 1 GPU.

Server cost
  - The cheapest combination of servers ({% for size in server_sizes %}{{ size }}{% if not loop.last %}, {% endif %}{% endfor %} GPUs) that adds up to exactly the required GPU count.
  - Server prices depend on the model's GPU type.

License cost
  - One license per GPU; the per-license price drops with volume:
    1 GPU {{ license_tiers.one | amount }}, 2 GPUs {{ license_tiers.two | amount }}, 3-4 GPUs {{ license_tiers.three_to_four | amount }}, 5+ GPUs {{ license_tiers.five_plus | amount }} {{ currency }}/month each.

Unit economics
  - Cost per user = total / concurrent users.
  - Cost per 1M tokens = total / output tokens the provisioned GPUs produce in a 30-day month at full load.

All figures are estimates. Real throughput varies, prices change, and network and storage are not included.
"#;

pub const SWEEP: &str = r#"{{ model_name }} ({{ gpu_type }})

{% for plan in plans -%}
{{ plan.concurrent_users }} users | {{ plan.gpus_needed }} GPUs | {{ plan.server_description }} | {{ plan.total_cost | amount }} {{ currency }} | {{ plan.cost_per_user | amount(decimals=2) }} per user
{% endfor -%}
"#;
