//! Fixed-format documents that need no template engine

use crate::domain::Category;

/// Marker line closing every fallback document
pub const FALLBACK_MARKER: &str = "*Generated by NeuroDesk AI (Fallback)*";

/// Document returned when the remote backend cannot produce one
pub fn fallback_document(prompt: &str, category: Category) -> String {
    format!(
        r#"# 🎯 Comprehensive Action Plan

## 📋 Project Overview
**Objective:** {prompt}
**Category:** {category}
**Complexity Level:** medium
**Estimated Timeline:** 1-3 months

## 🚀 Implementation Strategy
### Phase 1: Planning & Preparation (1-2 weeks)
1. **Define Objectives**
   - Set measurable goals
   - List SMART goals
   - Clear targets
2. **Resource Assessment**
   - Identify needs
   - Make a checklist
   - Ready to start
### Phase 2: Foundation Building (2-4 weeks)
1. **Initial Setup**
   - Gather all required tools and materials.
   - Establish a clear workflow and project structure.
2. **Skill Development**
   - Acquire any new skills needed for the project.
   - Practice fundamentals before moving on.
### Phase 3: Active Implementation (4-8 weeks)
1. **Core Execution**
   - Focus on the main tasks of the project.
   - Work through the plan systematically.
2. **Iterative Refinement**
   - Review progress regularly and make adjustments.
   - Seek feedback to improve the work.
### Phase 4: Optimization & Completion (2-4 weeks)
1. **Final Polish**
   - Complete all final details and checks.
   - Ensure the project meets all initial objectives.
2. **Review & Lessons Learned**
   - Evaluate the project's success.
   - Document insights for future use.

## 📊 Success Metrics
- **Completion Rate**: 90%+ tasks done on time
- **Quality Score**: Meets defined criteria

## 🛠️ Required Resources
- **Time Commitment**: 1-2 hours daily, Weekly reviews
- **Tools & Software**: Project management tool, Note-taking app

## ⚠️ Potential Challenges & Solutions
- **Challenge**: Time Management
  - **Solution**: Use time-blocking
- **Challenge**: Skill Gaps
  - **Solution**: Take short courses

## 🎯 Immediate Action Items
1. **Today**: Start with small, clear tasks.
2. **This Week**: Break the first phase into smaller steps.
3. **Next Week**: Start the initial project setup.
4. **Month 1**: Complete the foundation building phase.

## 📈 Long-term Vision
This plan ensures long-term success for "{prompt}". It's designed to be a living document that can be adjusted as you progress.
---
{FALLBACK_MARKER}
"#,
        category = category.display_name(),
    )
}

/// Short six-step plan, used when a template cannot be rendered
pub fn quick_plan(prompt: &str) -> String {
    format!(
        r#"# 🎯 Quick Action Plan

## Overview
Here's a basic plan for: "{prompt}"

## Steps
1. **Define Clear Objectives** - What exactly do you want to achieve?
2. **Research & Gather Information** - Learn about best practices and requirements
3. **Create a Timeline** - Break down tasks into manageable chunks
4. **Take Action** - Start with the first small step today
5. **Monitor Progress** - Track your advancement and adjust as needed
6. **Iterate & Improve** - Learn from results and optimize your approach

## Next Actions
- Start with step 1 immediately
- Set aside dedicated time daily
- Find resources and support
- Stay consistent and patient
"#
    )
}
